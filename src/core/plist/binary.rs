//! Binary property list (`bplist00`) writer
//!
//! Objects are laid out depth-first: a container first, then its keys, then
//! its values. Scalars are shared between all references with the same type
//! and value; containers and UIDs are always written as distinct objects.

use std::collections::HashMap;

use super::Value;

const MAGIC: &[u8] = b"bplist00";

/// Encode a value as a binary plist
pub fn to_vec(value: &Value, sort_keys: bool) -> Vec<u8> {
    let mut table = ObjectTable {
        objects: Vec::new(),
        scalars: HashMap::new(),
        sort_keys,
    };
    let top = table.flatten(value);

    let ref_size = int_size(table.objects.len() as u64);
    let mut out = Vec::from(MAGIC);
    let mut offsets = Vec::with_capacity(table.objects.len());
    for object in &table.objects {
        offsets.push(out.len() as u64);
        write_object(&mut out, object, ref_size);
    }

    let offset_table_offset = out.len() as u64;
    let offset_size = int_size(offset_table_offset);
    for offset in offsets {
        write_uint(&mut out, offset, offset_size);
    }

    // trailer: 5 unused bytes, sort version, sizes, then three 64-bit fields
    out.extend_from_slice(&[0; 5]);
    out.push(0);
    out.push(offset_size as u8);
    out.push(ref_size as u8);
    out.extend_from_slice(&(table.objects.len() as u64).to_be_bytes());
    out.extend_from_slice(&(top as u64).to_be_bytes());
    out.extend_from_slice(&offset_table_offset.to_be_bytes());
    out
}

/// Scalar identity: type plus value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Scalar<'a> {
    Str(&'a str),
    Int(i64),
    Real(u64),
    Bool(bool),
    Data(&'a [u8]),
}

#[derive(Debug)]
enum Object<'a> {
    Scalar(Scalar<'a>),
    Uid(u64),
    Array(Vec<usize>),
    Dict(Vec<usize>, Vec<usize>),
}

struct ObjectTable<'a> {
    objects: Vec<Object<'a>>,
    scalars: HashMap<Scalar<'a>, usize>,
    sort_keys: bool,
}

impl<'a> ObjectTable<'a> {
    fn scalar(&mut self, scalar: Scalar<'a>) -> usize {
        if let Some(&index) = self.scalars.get(&scalar) {
            return index;
        }
        let index = self.objects.len();
        self.objects.push(Object::Scalar(scalar));
        self.scalars.insert(scalar, index);
        index
    }

    fn flatten(&mut self, value: &'a Value) -> usize {
        match value {
            Value::String(s) => self.scalar(Scalar::Str(s)),
            Value::Integer(i) => self.scalar(Scalar::Int(*i)),
            Value::Real(r) => self.scalar(Scalar::Real(r.to_bits())),
            Value::Boolean(b) => self.scalar(Scalar::Bool(*b)),
            Value::Data(d) => self.scalar(Scalar::Data(d)),
            Value::Uid(uid) => {
                self.objects.push(Object::Uid(*uid));
                self.objects.len() - 1
            }
            Value::Array(items) => {
                let index = self.objects.len();
                self.objects.push(Object::Array(Vec::new()));
                let refs = items.iter().map(|item| self.flatten(item)).collect();
                self.objects[index] = Object::Array(refs);
                index
            }
            Value::Dictionary(dict) => {
                let index = self.objects.len();
                self.objects.push(Object::Dict(Vec::new(), Vec::new()));
                let entries = dict.entries(self.sort_keys);
                let keys = entries
                    .iter()
                    .map(|(key, _)| self.scalar(Scalar::Str(key)))
                    .collect();
                let values = entries.iter().map(|(_, value)| self.flatten(value)).collect();
                self.objects[index] = Object::Dict(keys, values);
                index
            }
        }
    }
}

/// Smallest of 1, 2, 4 or 8 bytes that can hold `count`
fn int_size(count: u64) -> usize {
    if count < 1 << 8 {
        1
    } else if count < 1 << 16 {
        2
    } else if count < 1 << 32 {
        4
    } else {
        8
    }
}

fn write_uint(out: &mut Vec<u8>, value: u64, size: usize) {
    out.extend_from_slice(&value.to_be_bytes()[8 - size..]);
}

/// Marker nibble plus length, with an integer object for lengths >= 15
fn write_marker(out: &mut Vec<u8>, token: u8, len: usize) {
    if len < 15 {
        out.push(token | len as u8);
    } else {
        out.push(token | 0xF);
        let size = int_size(len as u64);
        out.push(0x10 | size.trailing_zeros() as u8);
        write_uint(out, len as u64, size);
    }
}

fn write_object(out: &mut Vec<u8>, object: &Object<'_>, ref_size: usize) {
    match object {
        Object::Scalar(Scalar::Bool(false)) => out.push(0x08),
        Object::Scalar(Scalar::Bool(true)) => out.push(0x09),
        Object::Scalar(Scalar::Int(i)) => {
            if *i < 0 {
                out.push(0x13);
                out.extend_from_slice(&i.to_be_bytes());
            } else {
                let value = *i as u64;
                let size = int_size(value);
                out.push(0x10 | size.trailing_zeros() as u8);
                write_uint(out, value, size);
            }
        }
        Object::Scalar(Scalar::Real(bits)) => {
            out.push(0x23);
            out.extend_from_slice(&bits.to_be_bytes());
        }
        Object::Scalar(Scalar::Data(bytes)) => {
            write_marker(out, 0x40, bytes.len());
            out.extend_from_slice(bytes);
        }
        Object::Scalar(Scalar::Str(s)) => {
            if s.is_ascii() {
                write_marker(out, 0x50, s.len());
                out.extend_from_slice(s.as_bytes());
            } else {
                let units: Vec<u16> = s.encode_utf16().collect();
                write_marker(out, 0x60, units.len());
                for unit in units {
                    out.extend_from_slice(&unit.to_be_bytes());
                }
            }
        }
        Object::Uid(uid) => {
            let size = int_size(*uid);
            out.push(0x80 | (size - 1) as u8);
            write_uint(out, *uid, size);
        }
        Object::Array(refs) => {
            write_marker(out, 0xA0, refs.len());
            for &r in refs {
                write_uint(out, r as u64, ref_size);
            }
        }
        Object::Dict(keys, values) => {
            write_marker(out, 0xD0, keys.len());
            for &r in keys.iter().chain(values) {
                write_uint(out, r as u64, ref_size);
            }
        }
    }
}
