//! JSON text generator — the inverse of [`crate::parser::parse`].

use alloc::string::String;

use crate::scratch::Scratch;
use crate::value::Value;

/// Render `value` as compact JSON text: no insignificant whitespace, no
/// trailing commas, keys and strings always double-quoted.
pub fn stringify(value: &Value) -> String {
    let mut scratch = Scratch::new();
    write_value(&mut scratch, value);
    scratch.finish_string()
}

fn write_value(out: &mut Scratch, value: &Value) {
    match value {
        Value::Null => out.push_str("null"),
        Value::True => out.push_str("true"),
        Value::False => out.push_str("false"),
        Value::Number(n) => write_number(out, *n),
        Value::String(s) => write_string(out, s),
        Value::Array(elements) => {
            out.push_byte(b'[');
            for (i, element) in elements.iter().enumerate() {
                if i > 0 {
                    out.push_byte(b',');
                }
                write_value(out, element);
            }
            out.push_byte(b']');
        }
        Value::Object(members) => {
            out.push_byte(b'{');
            for (i, member) in members.iter().enumerate() {
                if i > 0 {
                    out.push_byte(b',');
                }
                write_string(out, &member.key);
                out.push_byte(b':');
                write_value(out, &member.value);
            }
            out.push_byte(b'}');
        }
    }
}

fn write_number(out: &mut Scratch, n: f64) {
    if n == 0.0 {
        // Rust's `{}` formatting of `-0.0` prints `-0`; RFC 8259 numbers
        // have no dedicated negative-zero form, so normalize to `0`.
        out.push_str("0");
        return;
    }
    let mut buf = alloc::string::String::new();
    use core::fmt::Write;
    let _ = write!(buf, "{}", n);
    out.push_str(&buf);
}

fn write_string(out: &mut Scratch, s: &str) {
    out.push_byte(b'"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                let mut hex = alloc::string::String::new();
                use core::fmt::Write;
                let _ = write!(hex, "\\u{:04X}", c as u32);
                out.push_str(&hex);
            }
            c => {
                let mut buf = [0u8; 4];
                out.push_str(c.encode_utf8(&mut buf));
            }
        }
    }
    out.push_byte(b'"');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use crate::value::Member;
    use alloc::vec;

    #[test]
    fn stringifies_literals() {
        assert_eq!(stringify(&Value::Null), "null");
        assert_eq!(stringify(&Value::True), "true");
        assert_eq!(stringify(&Value::False), "false");
    }

    #[test]
    fn stringifies_numbers() {
        assert_eq!(stringify(&Value::Number(0.0)), "0");
        assert_eq!(stringify(&Value::Number(-0.0)), "0");
        assert_eq!(stringify(&Value::Number(3.5)), "3.5");
        assert_eq!(stringify(&Value::Number(-42.0)), "-42");
    }

    #[test]
    fn escapes_control_and_special_chars() {
        let v = Value::String("a\"b\\c\u{8}d\u{c}e\nf\rg\th".into());
        assert_eq!(stringify(&v), r#""a\"b\\c\bd\fe\nf\rg\th""#);
    }

    #[test]
    fn does_not_escape_forward_slash() {
        let v = Value::String("a/b".into());
        assert_eq!(stringify(&v), r#""a/b""#);
    }

    #[test]
    fn escapes_other_control_chars_as_uppercase_hex() {
        let v = Value::String("\u{1}".into());
        assert_eq!(stringify(&v), "\"\\u0001\"");
    }

    #[test]
    fn stringifies_array_with_no_trailing_comma() {
        let v = Value::Array(vec![Value::Number(1.0), Value::Number(2.0)]);
        assert_eq!(stringify(&v), "[1,2]");
        assert_eq!(stringify(&Value::Array(vec![])), "[]");
    }

    #[test]
    fn stringifies_object_with_no_trailing_comma() {
        let v = Value::Object(vec![
            Member::new("a", Value::Number(1.0)),
            Member::new("b", Value::True),
        ]);
        assert_eq!(stringify(&v), r#"{"a":1,"b":true}"#);
        assert_eq!(stringify(&Value::Object(vec![])), "{}");
    }

    #[test]
    fn round_trips_through_parse_and_stringify() {
        let text = r#"{"a":[1,2.5,true,false,null,"x\ny"],"b":{}}"#;
        let v = parse(text).unwrap();
        assert_eq!(stringify(&v), text);
    }

    #[test]
    fn smallest_denormal_round_trips_through_parse_and_stringify() {
        let v = parse("4.9406564584124654e-324").unwrap();
        let n = v.as_number().unwrap();
        let reparsed = parse(&stringify(&v)).unwrap();
        assert_eq!(reparsed.as_number(), Some(n));
        assert_eq!(n, f64::from_bits(1));
    }

    #[test]
    fn max_double_round_trips_through_parse_and_stringify() {
        let v = parse("1.7976931348623157e+308").unwrap();
        let reparsed = parse(&stringify(&v)).unwrap();
        assert_eq!(reparsed.as_number(), Some(f64::MAX));
    }
}
