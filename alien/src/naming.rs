//! Identifier transforms.
//!
//! Pure helpers used to derive setter names and option abbreviations.

/// Joins `prefix` and `ident`, upper-casing the first character of `ident`.
///
/// # Examples
///
/// ```
/// use alien::naming::to_camel_case;
///
/// assert_eq!(to_camel_case("set", "name"), "setName");
/// assert_eq!(to_camel_case("", "email"), "Email");
/// ```
#[must_use]
pub fn to_camel_case(prefix: &str, ident: &str) -> String {
    let mut chars = ident.chars();
    let mut out = String::with_capacity(prefix.len() + ident.len());
    out.push_str(prefix);
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(chars.as_str());
    }
    out
}

/// Default setter name for a declared identifier: `name` becomes `setName`.
#[must_use]
pub fn setter_name(ident: &str) -> String {
    to_camel_case("set", ident)
}

/// First character followed by every later uppercase character.
///
/// # Examples
///
/// ```
/// use alien::naming::initialism;
///
/// assert_eq!(initialism("nameTransformer"), "nT");
/// assert_eq!(initialism("createBlankProperty"), "cBP");
/// assert_eq!(initialism("control"), "c");
/// ```
#[must_use]
pub fn initialism(ident: &str) -> String {
    let mut chars = ident.chars();
    let mut out = String::new();
    if let Some(first) = chars.next() {
        out.push(first);
        out.extend(chars.filter(|c| c.is_uppercase()));
    }
    out
}
