use std::fmt::{
    Display,
    Formatter,
    Result,
};
use crate::parameter::{
    traits::Shape,
    *,
};

fn is_shell_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || "-_./=:,+@%".contains(c)
}

/// Writes the tokens as a POSIX shell would need them typed: any token
/// holding a character outside the plain set is single quoted, with an
/// embedded `'` written as `'\''`.
pub(crate) fn write_tokens<'a>(
    f: &mut Formatter<'_>,
    tokens: impl Iterator<Item = &'a str>,
) -> Result {
    for (i, token) in tokens.enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        if !token.is_empty() && token.chars().all(is_shell_safe) {
            write!(f, "{}", token)?;
        } else {
            write!(f, "'{}'", token.replace('\'', r"'\''"))?;
        }
    }
    Ok(())
}

impl Display for Argument {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write_tokens(f, self.tokens())
    }
}

impl Display for MultiArguments {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write_tokens(f, self.tokens())
    }
}

impl Display for Opt {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write_tokens(f, self.tokens())
    }
}

impl Display for MultiOptions {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write_tokens(f, self.tokens())
    }
}

impl Display for Parameter {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write_tokens(f, self.tokens())
    }
}

#[cfg(test)]
mod test {
    use crate::parameter::*;

    #[test]
    fn test_display() {
        assert_eq!(Argument::new("-m", "90").to_string(), "-m 90");
        assert_eq!(
            MultiArguments::new("-i", ["a.txt", "b c.txt"]).to_string(),
            "-i a.txt -i 'b c.txt'",
        );
        assert_eq!(Opt::new("").to_string(), "''");
        assert_eq!(
            Parameter::from(MultiOptions::new(["a", "b"])).to_string(),
            "a b",
        );
    }

    #[test]
    fn test_display_shell_quoting() {
        assert_eq!(Opt::new("$HOME").to_string(), "'$HOME'");
        assert_eq!(Opt::new("a;rm").to_string(), "'a;rm'");
        assert_eq!(Opt::new(r"C:\x").to_string(), r"'C:\x'");
        assert_eq!(Opt::new("it's").to_string(), r"'it'\''s'");
        assert_eq!(Opt::new(r#"say "hi""#).to_string(), r#"'say "hi"'"#);
        assert_eq!(
            Argument::new("--out", "Output/x_1.txt").to_string(),
            "--out Output/x_1.txt",
        );
    }
}
