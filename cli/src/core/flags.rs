//! # cmdtree Flag Registry
//!
//! File: cli/src/core/flags.rs
//!
//! ## Overview
//!
//! Type-safe storage and resolution of the flags declared on one command node.
//! A `FlagRegistry` holds the node's `FlagSpec`s in declaration order and turns
//! a raw token sequence into typed `FlagValues` plus the tokens it did not
//! consume (positional arguments, in their original order).
//!
//! ## Accepted forms
//!
//! - `--name value`, `--name=value`, `-s value`, `-s=value`, `-svalue`
//! - `--flag` / `-f` alone for boolean flags (`=true|false` or a following
//!   literal `true`/`false` sets the value explicitly)
//! - repeatable string-list flags: values accumulate in encounter order and
//!   are split on commas (`-i a,b -i c` resolves to `[a, b, c]`)
//! - `--` ends flag parsing; a lone `-` and negative numbers are positionals
//!
//! Anything that looks like a flag but is not declared on the node is an
//! `UnknownFlag` error. Repeating a non-list flag keeps the last value.
//!
use crate::core::error::CmdtreeError;
use std::collections::BTreeMap;
use std::fmt;
use tracing::trace;

/// Long name and shorthand reserved for help on every node.
pub const HELP_FLAG: &str = "help";
pub const HELP_SHORT: char = 'h';

/// The value type a flag is declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagKind {
    Bool,
    Int,
    Str,
    StrList,
}

impl FlagKind {
    /// Type label used in help output and error messages.
    pub fn type_name(self) -> &'static str {
        match self {
            FlagKind::Bool => "bool",
            FlagKind::Int => "int",
            FlagKind::Str => "string",
            FlagKind::StrList => "strings",
        }
    }
}

/// A typed flag value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
    Bool(bool),
    Int(i64),
    Str(String),
    List(Vec<String>),
}

impl FlagValue {
    pub fn kind(&self) -> FlagKind {
        match self {
            FlagValue::Bool(_) => FlagKind::Bool,
            FlagValue::Int(_) => FlagKind::Int,
            FlagValue::Str(_) => FlagKind::Str,
            FlagValue::List(_) => FlagKind::StrList,
        }
    }

    /// True for `false`, `0`, `""` and `[]`. Help output hides such defaults.
    pub fn is_zero(&self) -> bool {
        match self {
            FlagValue::Bool(b) => !b,
            FlagValue::Int(i) => *i == 0,
            FlagValue::Str(s) => s.is_empty(),
            FlagValue::List(l) => l.is_empty(),
        }
    }
}

impl fmt::Display for FlagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagValue::Bool(b) => write!(f, "{}", b),
            FlagValue::Int(i) => write!(f, "{}", i),
            FlagValue::Str(s) => write!(f, "{:?}", s),
            FlagValue::List(l) => write!(f, "[{}]", l.join(",")),
        }
    }
}

/// Declaration of a single flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagSpec {
    pub name: String,
    pub short: Option<char>,
    pub kind: FlagKind,
    pub default: FlagValue,
    pub help: String,
}

impl FlagSpec {
    /// General constructor. `FlagRegistry::declare` rejects a default whose
    /// kind differs from `kind`.
    pub fn new(
        name: impl Into<String>,
        kind: FlagKind,
        default: FlagValue,
        help: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            short: None,
            kind,
            default,
            help: help.into(),
        }
    }

    pub fn bool(name: impl Into<String>, default: bool, help: impl Into<String>) -> Self {
        Self::new(name, FlagKind::Bool, FlagValue::Bool(default), help)
    }

    pub fn int(name: impl Into<String>, default: i64, help: impl Into<String>) -> Self {
        Self::new(name, FlagKind::Int, FlagValue::Int(default), help)
    }

    pub fn string(
        name: impl Into<String>,
        default: impl Into<String>,
        help: impl Into<String>,
    ) -> Self {
        Self::new(name, FlagKind::Str, FlagValue::Str(default.into()), help)
    }

    pub fn list<I, S>(name: impl Into<String>, default: I, help: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let default = default.into_iter().map(Into::into).collect();
        Self::new(name, FlagKind::StrList, FlagValue::List(default), help)
    }

    /// Sets the one-character shorthand (`-c`).
    pub fn short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    /// The `-c, --count int` column shown in help output.
    pub fn usage_label(&self) -> String {
        let short = match self.short {
            Some(c) => format!("-{}, ", c),
            None => "    ".to_string(),
        };
        match self.kind {
            FlagKind::Bool => format!("{}--{}", short, self.name),
            kind => format!("{}--{} {}", short, self.name, kind.type_name()),
        }
    }
}

/// One resolved flag: its value and whether the user supplied it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagEntry {
    pub value: FlagValue,
    pub explicit: bool,
}

/// Resolved flag values for one invocation, keyed by flag name.
///
/// Every declared flag has an entry; absent flags carry their default with
/// `explicit == false`, so handlers never need sentinel values to tell
/// "not provided" from a legitimately entered `0` or empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagValues {
    entries: BTreeMap<String, FlagEntry>,
}

impl FlagValues {
    pub fn get(&self, name: &str) -> Option<&FlagValue> {
        self.entries.get(name).map(|entry| &entry.value)
    }

    /// Whether the flag was given on the command line (as opposed to defaulted).
    pub fn is_set(&self, name: &str) -> bool {
        self.entries.get(name).is_some_and(|entry| entry.explicit)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FlagEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn bool(&self, name: &str) -> Result<bool, CmdtreeError> {
        match self.require(name)? {
            FlagValue::Bool(b) => Ok(*b),
            other => Err(kind_mismatch(name, other, FlagKind::Bool)),
        }
    }

    pub fn int(&self, name: &str) -> Result<i64, CmdtreeError> {
        match self.require(name)? {
            FlagValue::Int(i) => Ok(*i),
            other => Err(kind_mismatch(name, other, FlagKind::Int)),
        }
    }

    pub fn string(&self, name: &str) -> Result<&str, CmdtreeError> {
        match self.require(name)? {
            FlagValue::Str(s) => Ok(s),
            other => Err(kind_mismatch(name, other, FlagKind::Str)),
        }
    }

    pub fn list(&self, name: &str) -> Result<&[String], CmdtreeError> {
        match self.require(name)? {
            FlagValue::List(l) => Ok(l),
            other => Err(kind_mismatch(name, other, FlagKind::StrList)),
        }
    }

    fn require(&self, name: &str) -> Result<&FlagValue, CmdtreeError> {
        self.get(name).ok_or_else(|| CmdtreeError::FlagLookup {
            name: name.to_string(),
            message: "is not declared on this command".to_string(),
        })
    }
}

fn kind_mismatch(name: &str, found: &FlagValue, want: FlagKind) -> CmdtreeError {
    CmdtreeError::FlagLookup {
        name: name.to_string(),
        message: format!(
            "has kind {}, not {}",
            found.kind().type_name(),
            want.type_name()
        ),
    }
}

/// The flags declared on a single command node.
#[derive(Debug, Clone, Default)]
pub struct FlagRegistry {
    specs: Vec<FlagSpec>,
}

impl FlagRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a flag.
    ///
    /// Fails with `CmdtreeError::Config` (empty path, see `CmdtreeError::at`) when
    /// the name or shorthand is malformed, reserved, or already taken on this
    /// node, or when the default value does not match the declared kind.
    pub fn declare(&mut self, spec: FlagSpec) -> Result<(), CmdtreeError> {
        let config_err = |token: String, message: &str| CmdtreeError::Config {
            path: String::new(),
            token,
            message: message.to_string(),
        };

        let long = format!("--{}", spec.name);
        if spec.name.is_empty()
            || spec.name.starts_with('-')
            || spec.name.contains(['=', ' '])
        {
            return Err(config_err(long, "malformed flag name"));
        }
        if spec.name == HELP_FLAG {
            return Err(config_err(long, "flag name is reserved"));
        }
        if spec.default.kind() != spec.kind {
            return Err(config_err(
                long,
                &format!(
                    "default value has kind {} but the flag is declared {}",
                    spec.default.kind().type_name(),
                    spec.kind.type_name()
                ),
            ));
        }
        if self.by_name(&spec.name).is_some() {
            return Err(config_err(long, "duplicate flag name"));
        }
        if let Some(short) = spec.short {
            let token = format!("-{}", short);
            if short == '-' || short == '=' || short.is_whitespace() || short.is_ascii_digit() {
                return Err(config_err(token, "malformed shorthand"));
            }
            if short == HELP_SHORT {
                return Err(config_err(token, "shorthand is reserved"));
            }
            if self.by_short(short).is_some() {
                return Err(config_err(token, "duplicate shorthand"));
            }
        }
        self.specs.push(spec);
        Ok(())
    }

    /// Declared flags in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &FlagSpec> {
        self.specs.iter()
    }

    pub fn by_name(&self, name: &str) -> Option<&FlagSpec> {
        self.specs.iter().find(|spec| spec.name == name)
    }

    pub fn by_short(&self, short: char) -> Option<&FlagSpec> {
        self.specs.iter().find(|spec| spec.short == Some(short))
    }

    /// Resolves `tokens` against the declared flags.
    ///
    /// Returns the typed values (defaults filled in for absent flags) and the
    /// unconsumed tokens in their original order. Errors carry an empty path.
    pub fn resolve<I, S>(&self, tokens: I) -> Result<(FlagValues, Vec<String>), CmdtreeError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        // Reversed so the next token is always `pop()`.
        let mut pending: Vec<String> = tokens.into_iter().map(Into::into).collect();
        pending.reverse();

        let mut found: BTreeMap<&str, FlagValue> = BTreeMap::new();
        let mut rest = Vec::new();

        while let Some(token) = pending.pop() {
            if token == "--" {
                rest.extend(pending.drain(..).rev());
                break;
            }

            let (spec, inline) = if let Some(body) = token.strip_prefix("--") {
                let (name, inline) = match body.split_once('=') {
                    Some((name, value)) => (name, Some(value.to_string())),
                    None => (body, None),
                };
                let spec = self.by_name(name).ok_or_else(|| unknown_flag(&token))?;
                (spec, inline)
            } else if looks_like_flag(&token) {
                let mut chars = token[1..].chars();
                let short = chars.next().unwrap_or_default();
                let tail = chars.as_str();
                let spec = self.by_short(short).ok_or_else(|| unknown_flag(&token))?;
                let inline = match tail {
                    "" => None,
                    t => Some(t.strip_prefix('=').unwrap_or(t).to_string()),
                };
                (spec, inline)
            } else {
                rest.push(token);
                continue;
            };

            let value = take_value(spec, &token, inline, &mut pending)?;
            trace!("Flag --{} resolved to {}", spec.name, value);
            let merged = match (&value, found.get_mut(spec.name.as_str())) {
                (FlagValue::List(more), Some(FlagValue::List(existing))) => {
                    existing.extend(more.iter().cloned());
                    true
                }
                _ => false,
            };
            if !merged {
                found.insert(spec.name.as_str(), value);
            }
        }

        let mut values = FlagValues::default();
        for spec in &self.specs {
            let entry = match found.remove(spec.name.as_str()) {
                Some(value) => FlagEntry {
                    value,
                    explicit: true,
                },
                None => FlagEntry {
                    value: spec.default.clone(),
                    explicit: false,
                },
            };
            values.entries.insert(spec.name.clone(), entry);
        }
        Ok((values, rest))
    }
}

/// `-x`, `--x`: yes. `-`, `-5`, `-0.5`, `value`: no.
fn looks_like_flag(token: &str) -> bool {
    token.len() > 1 && token.starts_with('-') && token.parse::<f64>().is_err()
}

fn unknown_flag(token: &str) -> CmdtreeError {
    CmdtreeError::UnknownFlag {
        path: String::new(),
        token: token.to_string(),
    }
}

fn parse_err(token: &str, message: String) -> CmdtreeError {
    CmdtreeError::Parse {
        path: String::new(),
        token: token.to_string(),
        message,
    }
}

/// Accepts the same literals as Go's `strconv.ParseBool`.
fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}

fn take_value(
    spec: &FlagSpec,
    flag_token: &str,
    inline: Option<String>,
    pending: &mut Vec<String>,
) -> Result<FlagValue, CmdtreeError> {
    match spec.kind {
        FlagKind::Bool => {
            let raw = match inline {
                Some(raw) => raw,
                None => match pending.last().map(String::as_str) {
                    Some("true") | Some("false") => pending.pop().unwrap_or_default(),
                    _ => return Ok(FlagValue::Bool(true)),
                },
            };
            parse_bool(&raw).map(FlagValue::Bool).ok_or_else(|| {
                parse_err(&raw, format!("invalid bool value for flag '--{}'", spec.name))
            })
        }
        FlagKind::Int => {
            let raw = required_value(spec, flag_token, inline, pending)?;
            raw.parse::<i64>().map(FlagValue::Int).map_err(|e| {
                parse_err(
                    &raw,
                    format!("invalid int value for flag '--{}': {}", spec.name, e),
                )
            })
        }
        FlagKind::Str => required_value(spec, flag_token, inline, pending).map(FlagValue::Str),
        FlagKind::StrList => {
            let raw = required_value(spec, flag_token, inline, pending)?;
            Ok(FlagValue::List(
                raw.split(',')
                    .filter(|item| !item.is_empty())
                    .map(str::to_string)
                    .collect(),
            ))
        }
    }
}

/// The inline value, or the next token unless it is itself a flag or `--`.
fn required_value(
    spec: &FlagSpec,
    flag_token: &str,
    inline: Option<String>,
    pending: &mut Vec<String>,
) -> Result<String, CmdtreeError> {
    if let Some(raw) = inline {
        return Ok(raw);
    }
    match pending.last() {
        Some(next) if next != "--" && !looks_like_flag(next) => Ok(pending.pop().unwrap_or_default()),
        _ => Err(parse_err(
            flag_token,
            format!("flag '--{}' needs an argument", spec.name),
        )),
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorKind;

    fn hello_flags() -> FlagRegistry {
        let mut reg = FlagRegistry::new();
        reg.declare(FlagSpec::int("count", 1, "Number of greetings").short('c'))
            .unwrap();
        reg.declare(FlagSpec::bool("shout", false, "Greet loudly").short('s'))
            .unwrap();
        reg
    }

    fn process_flags() -> FlagRegistry {
        let mut reg = FlagRegistry::new();
        reg.declare(FlagSpec::list("items", Vec::<String>::new(), "Items").short('i'))
            .unwrap();
        reg.declare(FlagSpec::bool("verbose", false, "Verbose").short('v'))
            .unwrap();
        reg.declare(FlagSpec::string("env", "development", "Environment").short('e'))
            .unwrap();
        reg
    }

    #[test]
    fn test_declare_rejects_collisions() {
        let mut reg = hello_flags();

        let dup_name = reg.declare(FlagSpec::int("count", 2, "again")).unwrap_err();
        assert_eq!(dup_name.kind(), ErrorKind::Config);
        assert_eq!(dup_name.token(), Some("--count"));

        let dup_short = reg
            .declare(FlagSpec::string("config", "", "path").short('c'))
            .unwrap_err();
        assert_eq!(dup_short.kind(), ErrorKind::Config);
        assert_eq!(dup_short.token(), Some("-c"));

        // Nothing was registered by the failed declarations.
        assert_eq!(reg.iter().count(), 2);
    }

    #[test]
    fn test_declare_rejects_malformed_specs() {
        let mut reg = FlagRegistry::new();
        assert!(reg.declare(FlagSpec::bool("", false, "")).is_err());
        assert!(reg.declare(FlagSpec::bool("-x", false, "")).is_err());
        assert!(reg.declare(FlagSpec::bool("help", false, "")).is_err());
        assert!(reg.declare(FlagSpec::bool("hush", false, "").short('h')).is_err());
        assert!(reg.declare(FlagSpec::bool("nine", false, "").short('9')).is_err());
        let mismatched = FlagSpec::new("count", FlagKind::Int, FlagValue::Bool(true), "");
        assert_eq!(reg.declare(mismatched).unwrap_err().kind(), ErrorKind::Config);
        assert_eq!(reg.iter().count(), 0);
    }

    #[test]
    fn test_defaults_apply_when_absent() {
        let (values, rest) = hello_flags().resolve(["Ann"]).unwrap();
        assert_eq!(values.int("count").unwrap(), 1);
        assert!(!values.bool("shout").unwrap());
        assert!(!values.is_set("count"));
        assert!(!values.is_set("shout"));
        assert_eq!(rest, vec!["Ann"]);
    }

    #[test]
    fn test_long_short_and_inline_forms() {
        let reg = hello_flags();
        for tokens in [
            vec!["--count", "3"],
            vec!["--count=3"],
            vec!["-c", "3"],
            vec!["-c=3"],
            vec!["-c3"],
        ] {
            let (values, rest) = reg.resolve(tokens.clone()).unwrap();
            assert_eq!(values.int("count").unwrap(), 3, "tokens: {:?}", tokens);
            assert!(values.is_set("count"));
            assert!(rest.is_empty());
        }
    }

    #[test]
    fn test_order_independent_for_single_valued_flags() {
        let reg = hello_flags();
        let (a, _) = reg.resolve(["--count", "3", "--shout"]).unwrap();
        let (b, _) = reg.resolve(["--shout", "--count", "3"]).unwrap();
        assert_eq!(a, b);
        assert!(a.bool("shout").unwrap());
    }

    #[test]
    fn test_repeated_single_valued_flag_keeps_last() {
        let (values, _) = hello_flags().resolve(["-c", "2", "-c", "5"]).unwrap();
        assert_eq!(values.int("count").unwrap(), 5);
    }

    #[test]
    fn test_bool_explicit_values() {
        let reg = hello_flags();
        let (values, _) = reg.resolve(["--shout=false"]).unwrap();
        assert!(!values.bool("shout").unwrap());
        assert!(values.is_set("shout"));

        let (values, rest) = reg.resolve(["--shout", "false", "Ann"]).unwrap();
        assert!(!values.bool("shout").unwrap());
        assert_eq!(rest, vec!["Ann"]);

        // A following token that is not a bool literal stays positional.
        let (values, rest) = reg.resolve(["-s", "Ann"]).unwrap();
        assert!(values.bool("shout").unwrap());
        assert_eq!(rest, vec!["Ann"]);

        let err = reg.resolve(["--shout=maybe"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert_eq!(err.token(), Some("maybe"));
    }

    #[test]
    fn test_list_flags_accumulate_in_order() {
        let reg = process_flags();
        let (values, _) = reg.resolve(["-i", "a", "-i", "b", "-i", "c"]).unwrap();
        assert_eq!(values.list("items").unwrap(), ["a", "b", "c"]);

        let (values, _) = reg.resolve(["--items", "a,b", "-v", "--items=c"]).unwrap();
        assert_eq!(values.list("items").unwrap(), ["a", "b", "c"]);
        assert!(values.bool("verbose").unwrap());
    }

    #[test]
    fn test_int_parse_errors() {
        let reg = hello_flags();
        let err = reg.resolve(["--count", "three"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert_eq!(err.token(), Some("three"));

        let (values, _) = reg.resolve(["--count", "-2"]).unwrap();
        assert_eq!(values.int("count").unwrap(), -2);
    }

    #[test]
    fn test_missing_value_is_parse_error() {
        let reg = process_flags();
        let err = reg.resolve(["--env"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert_eq!(err.token(), Some("--env"));

        let err = reg.resolve(["-e", "--verbose"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert_eq!(err.token(), Some("-e"));
    }

    #[test]
    fn test_unknown_flags_are_rejected() {
        let reg = hello_flags();
        let err = reg.resolve(["--bogus"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownFlag);
        assert_eq!(err.token(), Some("--bogus"));

        let err = reg.resolve(["-x"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownFlag);
    }

    #[test]
    fn test_terminator_and_positional_dashes() {
        let reg = hello_flags();
        let (values, rest) = reg
            .resolve(["-", "-7", "--", "--shout", "-c"])
            .unwrap();
        assert!(!values.is_set("shout"));
        assert_eq!(rest, vec!["-", "-7", "--shout", "-c"]);
    }

    #[test]
    fn test_typed_accessors_report_misuse() {
        let (values, _) = hello_flags().resolve(Vec::<String>::new()).unwrap();
        let err = values.string("count").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FlagLookup);
        assert_eq!(err.to_string(), "flag '--count' has kind int, not string");
        assert_eq!(
            values.list("shout").unwrap_err().to_string(),
            "flag '--shout' has kind bool, not strings"
        );
        assert_eq!(values.bool("missing").unwrap_err().kind(), ErrorKind::FlagLookup);
    }

    #[test]
    fn test_usage_labels() {
        assert_eq!(
            FlagSpec::int("count", 1, "").short('c').usage_label(),
            "-c, --count int"
        );
        assert_eq!(FlagSpec::bool("dry-run", false, "").usage_label(), "    --dry-run");
        assert_eq!(FlagValue::Str("development".into()).to_string(), "\"development\"");
        assert_eq!(FlagValue::List(vec!["a".into(), "b".into()]).to_string(), "[a,b]");
    }
}
