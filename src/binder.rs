use std::borrow::Cow;

use crate::error::PgSimpleError;

/// Replace each `?` in `template` with the next argument, left to right.
///
/// Binding is purely lexical: arguments are spliced in verbatim with no
/// quoting or escaping, a `?` inside a SQL string literal is still treated as
/// a placeholder, and there is no escape for a literal `?`. Quoting is the
/// caller's (or the server's) responsibility.
///
/// Arguments beyond the number of placeholders are silently ignored. A
/// template with no placeholders is returned borrowed and unchanged.
///
/// # Errors
/// Returns [`PgSimpleError::InsufficientArguments`] as soon as a placeholder
/// is found with no argument left to bind; no partial output is produced.
pub fn bind_template<'a>(
    template: &'a str,
    args: &[String],
) -> Result<Cow<'a, str>, PgSimpleError> {
    let mut out: Option<String> = None;
    let mut arg_pos = 0;
    let mut text_start = 0;
    let bytes = template.as_bytes();

    // `?` is a single ASCII byte, so byte offsets are always char boundaries.
    for idx in 0..bytes.len() {
        if bytes[idx] != b'?' {
            continue;
        }

        if arg_pos == args.len() {
            return Err(PgSimpleError::InsufficientArguments);
        }

        let buf = out.get_or_insert_with(|| String::with_capacity(template.len()));
        buf.push_str(&template[text_start..idx]);
        buf.push_str(&args[arg_pos]);
        arg_pos += 1;
        text_start = idx + 1;
    }

    match out {
        Some(mut buf) => {
            buf.push_str(&template[text_start..]);
            Ok(Cow::Owned(buf))
        }
        None => Ok(Cow::Borrowed(template)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_in_order() {
        let args = vec!["X".to_string(), "Y".to_string()];
        let res = bind_template("a?b?c", &args).unwrap();
        assert_eq!(res, "aXbYc");
    }

    #[test]
    fn no_placeholders_borrows_unchanged() {
        let res = bind_template("no placeholders", &[]).unwrap();
        assert!(matches!(res, Cow::Borrowed(_)));
        assert_eq!(res, "no placeholders");
    }

    #[test]
    fn empty_template_is_valid() {
        assert_eq!(bind_template("", &[]).unwrap(), "");
    }

    #[test]
    fn placeholder_at_either_end() {
        let args = vec!["X".to_string()];
        assert_eq!(bind_template("?b", &args).unwrap(), "Xb");
        assert_eq!(bind_template("a?", &args).unwrap(), "aX");
        assert_eq!(bind_template("?", &args).unwrap(), "X");
    }

    #[test]
    fn consecutive_placeholders() {
        let args = vec!["X".to_string(), "Y".to_string()];
        assert_eq!(bind_template("??", &args).unwrap(), "XY");
    }

    #[test]
    fn extra_args_ignored() {
        let args = vec!["X".to_string(), "unused".to_string()];
        assert_eq!(bind_template("v=?", &args).unwrap(), "v=X");
    }

    #[test]
    fn missing_args_fail() {
        assert!(matches!(
            bind_template("?", &[]),
            Err(PgSimpleError::InsufficientArguments)
        ));

        // The second placeholder has no argument.
        let args = vec!["X".to_string()];
        assert!(matches!(
            bind_template("??", &args),
            Err(PgSimpleError::InsufficientArguments)
        ));
    }

    #[test]
    fn failure_message_is_fixed() {
        let err = bind_template("?", &[]).unwrap_err();
        assert_eq!(err.to_string(), "Not enough arguments for format.\n");
    }

    #[test]
    fn no_escaping_is_performed() {
        let args = vec!["O'Brien".to_string()];
        let res = bind_template("select '?'", &args).unwrap();
        // Placeholders are recognized even inside string literals, and the
        // argument is spliced verbatim.
        assert_eq!(res, "select 'O'Brien'");
    }

    #[test]
    fn multibyte_literal_text_survives() {
        let args = vec!["X".to_string()];
        assert_eq!(bind_template("résumé = ?", &args).unwrap(), "résumé = X");
    }
}
