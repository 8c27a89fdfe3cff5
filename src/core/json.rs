use crate::utils::error::Result;
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use std::io::{self, Write};

const INDENT: &[u8] = b"    ";

/// 4 格縮排的 JSON。`escape_non_ascii` 為 true 時，U+007F 以上字元輸出為 `\uXXXX`
pub fn to_pretty_bytes<T: Serialize + ?Sized>(value: &T, escape_non_ascii: bool) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    let formatter = RecordFormatter {
        inner: PrettyFormatter::with_indent(INDENT),
        escape_non_ascii,
    };

    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut serializer)?;

    Ok(out)
}

struct RecordFormatter<'a> {
    inner: PrettyFormatter<'a>,
    escape_non_ascii: bool,
}

impl Formatter for RecordFormatter<'_> {
    fn begin_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_array(writer)
    }

    fn end_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object(writer)
    }

    fn end_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object_value(writer)
    }

    fn write_string_fragment<W: ?Sized + Write>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()> {
        if !self.escape_non_ascii {
            return writer.write_all(fragment.as_bytes());
        }

        let mut start = 0;
        for (i, c) in fragment.char_indices() {
            if c < '\u{7f}' {
                continue;
            }

            writer.write_all(fragment[start..i].as_bytes())?;
            // U+FFFF 以上拆成 UTF-16 代理對
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = i + c.len_utf8();
        }

        writer.write_all(fragment[start..].as_bytes())
    }
}
