use std::path::Path;

use colorschemes_core::core::pipeline::Selection;
use colorschemes_core::{
    generate_all, load_palette, GenerateContext, OutputError, Palette, GENERATORS,
};

fn repo_path(relative: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(relative)
}

fn read_text(dir: &Path, name: &str) -> String {
    std::fs::read_to_string(dir.join(name)).unwrap()
}

#[test]
fn sample_palette_generates_every_file() {
    let palette = load_palette(&repo_path("palettes/eighties.toml")).unwrap();
    let out = tempfile::tempdir().unwrap();
    let ctx = GenerateContext::new(repo_path("templates"));

    let report = generate_all(&palette, &ctx, out.path(), Selection::All).unwrap();
    assert_eq!(report.len(), GENERATORS.len());
    for generator in GENERATORS {
        let meta = std::fs::metadata(out.path().join(generator.file_name)).unwrap();
        assert!(meta.len() > 0, "{} is empty", generator.file_name);
    }
}

#[test]
fn outputs_agree_on_the_background() {
    let out = tempfile::tempdir().unwrap();
    let ctx = GenerateContext::new(repo_path("templates"));
    generate_all(&Palette::eighties(), &ctx, out.path(), Selection::All).unwrap();

    assert!(read_text(out.path(), "kitty.conf").contains("background #2d2d2d\n"));
    assert!(read_text(out.path(), "termux.properties").contains("background=#2d2d2d\n"));
    assert!(read_text(out.path(), "zsh.zsh").contains("colorscheme_bg=2d2d2d\n"));
    assert!(read_text(out.path(), "variables.css").contains("--dotfiles-colorscheme-bg: #2d2d2d;"));
    assert!(read_text(out.path(), ".minttyrc").starts_with("BackgroundColour=45,45,45\n"));
    assert!(read_text(out.path(), "vscode-colorCustomizations.json")
        .contains("\"terminal.background\": \"#2d2d2d\""));

    let prism = read_text(out.path(), "prismjs-theme.css");
    assert!(prism.contains("background: #2d2d2d;"));
    assert!(!prism.contains("var(--dotfiles-colorscheme-"));
}

#[test]
fn binary_outputs_are_plists() {
    let out = tempfile::tempdir().unwrap();
    let names = ["iterm.itermcolors", "apple-terminal.terminal"];
    generate_all(
        &Palette::eighties(),
        &GenerateContext::new(repo_path("templates")),
        out.path(),
        Selection::Only(&names),
    )
    .unwrap();

    for name in names {
        let text = read_text(out.path(), name);
        assert!(text.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"), "{}", name);
        assert!(text.ends_with("</plist>\n"), "{}", name);
    }
}

#[test]
fn missing_template_leaves_no_output() {
    let out = tempfile::tempdir().unwrap();
    let target = out.path().join("colors");
    let empty = tempfile::tempdir().unwrap();

    let err = generate_all(
        &Palette::eighties(),
        &GenerateContext::new(empty.path()),
        &target,
        Selection::All,
    )
    .unwrap_err();
    assert!(matches!(err, OutputError::Generator { file_name: "prismjs-theme.css", .. }));
    assert!(!target.exists());
}
