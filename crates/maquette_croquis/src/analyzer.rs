//! DTO Analyzer - extracts declarations and properties from TypeScript-like source.
//!
//! This is a tolerant, line-oriented scanner built on regular expressions,
//! not a TypeScript parser. Known limitations are kept on purpose:
//!
//! - union types spanning multiple lines are not joined
//! - deeply nested generics are only split, never resolved
//! - a property must start and end on the same line; an inline object type
//!   opened on one line (`address: {`) is recorded as `{}`
//!
//! Declarations are located with a regex for their header and then cut at
//! the matching closing brace.

use crate::error::InferenceError;
use crate::types::{DtoKind, DtoMetadata, PropertyMetadata, PropertyType};
use maquette_carton::FxHashSet;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

static INTERFACE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?m)^[ \t]*(?:export\s+)?(?:declare\s+)?interface\s+([A-Za-z_$][\w$]*)\s*(?:<[^{]*?>)?\s*(?:extends\s+([^{]+?))?\s*\{",
    )
    .unwrap()
});

static TYPE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?m)^[ \t]*(?:export\s+)?(?:declare\s+)?type\s+([A-Za-z_$][\w$]*)\s*(?:<[^{=]*?>)?\s*=\s*\{",
    )
    .unwrap()
});

static CLASS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?m)^[ \t]*(?:export\s+)?(?:default\s+)?(?:abstract\s+)?class\s+([A-Za-z_$][\w$]*)\s*(?:<[^{]*?>)?\s*(?:extends\s+([A-Za-z_$][\w$.]*)(?:<[^{]*?>)?)?\s*(?:implements\s+[^{]+?)?\s*\{",
    )
    .unwrap()
});

static PROPERTY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^((?:(?:public|private|protected|static|declare|override|readonly)\s+)*)([A-Za-z_$][\w$]*)\s*([?!])?\s*:\s*(.+)$",
    )
    .unwrap()
});

static SCRIPT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<script\b[^>]*>(.*?)</script>").unwrap());

/// Classification of a raw type string.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeInfo {
    pub ty: PropertyType,
    pub nullable: bool,
    pub possible_values: Option<Vec<serde_json::Value>>,
    pub array_type: Option<PropertyType>,
}

/// Extract the contents of `<script>` blocks from a single-file component.
///
/// Sources without a script block are returned unchanged.
pub fn extract_script(source: &str) -> Cow<'_, str> {
    let blocks: Vec<&str> = SCRIPT_RE
        .captures_iter(source)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str()))
        .collect();

    if blocks.is_empty() {
        Cow::Borrowed(source)
    } else {
        Cow::Owned(blocks.join("\n"))
    }
}

/// Analyze every interface, object type alias and class in `source`.
///
/// Results are returned in source order. A source without declarations
/// yields an empty list.
pub fn analyze_dtos(source: &str) -> Vec<DtoMetadata> {
    let source = extract_script(source);
    let source = source.as_ref();

    let mut found: Vec<(usize, DtoMetadata)> = Vec::new();

    for (re, kind) in [
        (&*INTERFACE_RE, DtoKind::Interface),
        (&*TYPE_RE, DtoKind::Type),
        (&*CLASS_RE, DtoKind::Class),
    ] {
        for cap in re.captures_iter(source) {
            let (Some(whole), Some(name)) = (cap.get(0), cap.get(1)) else {
                continue;
            };

            // The header regex ends on the opening brace.
            let open = whole.end() - 1;
            let Some(close) = find_block_end(source, open) else {
                tracing::debug!(name = name.as_str(), "unbalanced declaration body, skipped");
                continue;
            };

            let mut dto = DtoMetadata::new(name.as_str(), kind);
            dto.properties = parse_properties(&source[open + 1..close]);
            dto.extends = cap.get(2).map(|m| parse_extends(m.as_str()));
            dto.description = leading_jsdoc(&source[..whole.start()])
                .and_then(|doc| jsdoc_description(&doc));

            found.push((whole.start(), dto));
        }
    }

    found.sort_by_key(|(start, _)| *start);
    found.into_iter().map(|(_, dto)| dto).collect()
}

/// Names of all DTOs declared in `source`.
pub fn list_dtos(source: &str) -> Vec<String> {
    analyze_dtos(source).into_iter().map(|dto| dto.name).collect()
}

/// Analyze `source` and return the DTO called `name`.
pub fn find_dto(source: &str, name: &str) -> Result<DtoMetadata, InferenceError> {
    let dtos = analyze_dtos(source);
    select_dto(dtos, name)
}

/// Pick `name` out of already analyzed DTOs.
pub(crate) fn select_dto(dtos: Vec<DtoMetadata>, name: &str) -> Result<DtoMetadata, InferenceError> {
    let available: Vec<String> = dtos.iter().map(|d| d.name.clone()).collect();
    dtos.into_iter()
        .find(|d| d.name == name)
        .ok_or_else(|| InferenceError::DtoNotFound {
            name: name.to_string(),
            available,
        })
}

/// Prepend properties inherited from parents declared in `all`.
///
/// Parents are walked depth-first, each at most once. A property declared
/// on the child replaces an inherited one with the same name.
pub fn resolve_inherited(dto: &DtoMetadata, all: &[DtoMetadata]) -> DtoMetadata {
    let mut visited = FxHashSet::default();
    visited.insert(dto.name.clone());

    let mut inherited = Vec::new();
    collect_inherited(dto, all, &mut visited, &mut inherited);

    if inherited.is_empty() {
        return dto.clone();
    }

    let own: FxHashSet<&str> = dto.properties.iter().map(|p| p.name.as_str()).collect();
    let mut seen = FxHashSet::default();
    let mut properties: Vec<PropertyMetadata> = inherited
        .into_iter()
        .filter(|p| !own.contains(p.name.as_str()) && seen.insert(p.name.clone()))
        .collect();
    properties.extend(dto.properties.iter().cloned());

    DtoMetadata {
        properties,
        ..dto.clone()
    }
}

fn collect_inherited(
    dto: &DtoMetadata,
    all: &[DtoMetadata],
    visited: &mut FxHashSet<String>,
    out: &mut Vec<PropertyMetadata>,
) {
    let Some(parents) = &dto.extends else {
        return;
    };

    for parent_name in parents {
        let Some(parent) = all.iter().find(|d| &d.name == parent_name) else {
            continue;
        };
        if !visited.insert(parent.name.clone()) {
            continue;
        }
        collect_inherited(parent, all, visited, out);
        out.extend(parent.properties.iter().cloned());
    }
}

/// Parse an `extends` clause into bare parent names.
fn parse_extends(clause: &str) -> Vec<String> {
    split_top_level(clause, ',')
        .into_iter()
        .map(|part| {
            let part = part.trim();
            part.split('<').next().unwrap_or(part).trim().to_string()
        })
        .filter(|name| !name.is_empty())
        .collect()
}

/// Find the byte index of the brace closing the one at `open`.
///
/// Braces inside string literals and comments are ignored.
fn find_block_end(source: &str, open: usize) -> Option<usize> {
    let bytes = source.as_bytes();
    let mut depth = 0usize;
    let mut i = open;

    while i < bytes.len() {
        match bytes[i] {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                while i < bytes.len() && bytes[i] != b'\n' {
                    i += 1;
                }
                continue;
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                let end = source[i + 2..].find("*/")?;
                i += end + 4;
                continue;
            }
            quote @ (b'\'' | b'"' | b'`') => {
                i += 1;
                while i < bytes.len() && bytes[i] != quote {
                    if bytes[i] == b'\\' {
                        i += 1;
                    }
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }

    None
}

/// JSDoc block directly preceding a declaration.
fn leading_jsdoc(before: &str) -> Option<String> {
    let trimmed = before.trim_end();
    let body = trimmed.strip_suffix("*/")?;
    let start = body.rfind("/**")?;
    let inner = &body[start + 3..];
    if inner.contains("*/") {
        return None;
    }
    Some(clean_jsdoc(inner))
}

/// Strip comment decoration from a JSDoc body.
pub(crate) fn clean_jsdoc(raw: &str) -> String {
    raw.lines()
        .map(|line| {
            let line = line.trim();
            let line = line.strip_prefix('*').unwrap_or(line);
            line.trim()
        })
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// First sentence of a JSDoc body, before any `@tag`.
pub fn jsdoc_description(jsdoc: &str) -> Option<String> {
    let mut text = String::new();

    for word in jsdoc.split_whitespace() {
        if word.starts_with('@') {
            break;
        }
        if !text.is_empty() {
            text.push(' ');
        }
        text.push_str(word);
        if word.ends_with('.') {
            break;
        }
    }

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Line-oriented property scanner for a declaration body.
fn parse_properties(body: &str) -> Vec<PropertyMetadata> {
    let mut properties = Vec::new();
    let mut brace_depth: i32 = 0;
    let mut pending_doc: Option<String> = None;
    // Open block comment: (is_jsdoc, collected text)
    let mut open_comment: Option<(bool, String)> = None;

    for line in body.lines() {
        let mut rest = line.trim();

        if let Some((is_doc, mut buf)) = open_comment.take() {
            match rest.find("*/") {
                Some(idx) => {
                    buf.push('\n');
                    buf.push_str(&rest[..idx]);
                    if is_doc && brace_depth == 0 {
                        pending_doc = Some(clean_jsdoc(&buf));
                    }
                    rest = rest[idx + 2..].trim();
                }
                None => {
                    buf.push('\n');
                    buf.push_str(rest);
                    open_comment = Some((is_doc, buf));
                    continue;
                }
            }
        }

        // Leading comments, possibly followed by code on the same line.
        while rest.starts_with("/*") {
            let is_doc = rest.starts_with("/**") && !rest.starts_with("/**/");
            let inner = &rest[if is_doc { 3 } else { 2 }..];
            match inner.find("*/") {
                Some(idx) => {
                    if is_doc && brace_depth == 0 {
                        pending_doc = Some(clean_jsdoc(&inner[..idx]));
                    }
                    rest = inner[idx + 2..].trim();
                }
                None => {
                    open_comment = Some((is_doc, inner.to_string()));
                    rest = "";
                    break;
                }
            }
        }

        if rest.is_empty() || rest.starts_with("//") {
            continue;
        }

        for (segment, start_depth) in split_statements(rest, &mut brace_depth) {
            if start_depth != 0 {
                continue;
            }
            let doc = pending_doc.take();
            if let Some(property) = parse_property_line(segment, doc) {
                properties.push(property);
            }
        }
        pending_doc = None;
    }

    properties
}

/// Split one line of code into statements at top-level `;` and `,`.
///
/// `brace_depth` carries `{}` nesting across lines; each statement is
/// returned with the depth it started at.
fn split_statements<'a>(line: &'a str, brace_depth: &mut i32) -> Vec<(&'a str, i32)> {
    let bytes = line.as_bytes();
    let mut segments = Vec::new();
    let mut local_depth: i32 = 0;
    let mut start = 0;
    let mut start_depth = *brace_depth;
    let mut quote: Option<u8> = None;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];

        if let Some(q) = quote {
            if b == b'\\' {
                i += 1;
            } else if b == q {
                quote = None;
            }
            i += 1;
            continue;
        }

        match b {
            b'\'' | b'"' | b'`' => quote = Some(b),
            b'{' => *brace_depth += 1,
            b'}' => *brace_depth -= 1,
            b'(' | b'[' | b'<' => local_depth += 1,
            b'>' if i > 0 && bytes[i - 1] == b'=' => {}
            b')' | b']' | b'>' => local_depth -= 1,
            b'/' if bytes.get(i + 1) == Some(&b'/') => break,
            b';' | b',' if local_depth <= 0 && *brace_depth == start_depth => {
                push_segment(&mut segments, &line[start..i], start_depth);
                start = i + 1;
                start_depth = *brace_depth;
            }
            _ => {}
        }
        i += 1;
    }

    let end = if i < bytes.len() { i } else { bytes.len() };
    push_segment(&mut segments, &line[start..end.max(start)], start_depth);
    segments
}

#[inline]
fn push_segment<'a>(segments: &mut Vec<(&'a str, i32)>, text: &'a str, depth: i32) {
    let text = text.trim();
    if !text.is_empty() && text != "}" {
        segments.push((text, depth));
    }
}

/// Parse `[modifiers] name[?]: type [= default]`.
fn parse_property_line(segment: &str, jsdoc: Option<String>) -> Option<PropertyMetadata> {
    let cap = PROPERTY_RE.captures(segment)?;
    let modifiers = cap.get(1).map_or("", |m| m.as_str());
    let name = cap.get(2)?.as_str();
    let marker = cap.get(3).map(|m| m.as_str());
    let (raw_type, default_value) = split_default(cap.get(4)?.as_str());

    let mut raw_type = raw_type.trim().trim_end_matches([';', ',']).trim().to_string();
    if raw_type.is_empty() {
        return None;
    }
    if raw_type.starts_with('{') && raw_type.matches('{').count() != raw_type.matches('}').count()
    {
        raw_type = "{}".to_string();
    }

    let mut property = PropertyMetadata::new(name, raw_type);
    property.optional = marker == Some("?");
    property.readonly = modifiers.split_whitespace().any(|m| m == "readonly");
    property.default_value = default_value.map(|d| d.trim().to_string());
    if let Some(doc) = jsdoc {
        property = property.with_jsdoc(doc);
    }

    Some(property)
}

/// Separate a type annotation from a trailing `= initializer`.
fn split_default(text: &str) -> (&str, Option<&str>) {
    let bytes = text.as_bytes();
    let mut depth: i32 = 0;
    let mut quote: Option<u8> = None;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if let Some(q) = quote {
            if b == b'\\' {
                i += 1;
            } else if b == q {
                quote = None;
            }
            i += 1;
            continue;
        }
        match b {
            b'\'' | b'"' | b'`' => quote = Some(b),
            b'(' | b'[' | b'{' | b'<' => depth += 1,
            b'>' if i > 0 && bytes[i - 1] == b'=' => {}
            b')' | b']' | b'}' | b'>' => depth -= 1,
            b'=' if depth <= 0 && bytes.get(i + 1) != Some(&b'>') => {
                let value = text[i + 1..].trim();
                let value = (!value.is_empty()).then_some(value);
                return (&text[..i], value);
            }
            _ => {}
        }
        i += 1;
    }

    (text, None)
}

/// Split `text` at top-level occurrences of `sep`, outside quotes and brackets.
pub(crate) fn split_top_level(text: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth: i32 = 0;
    let mut quote: Option<char> = None;
    let mut start = 0;
    let mut prev = '\0';

    for (i, c) in text.char_indices() {
        if let Some(q) = quote {
            if c == q && prev != '\\' {
                quote = None;
            }
            prev = c;
            continue;
        }
        match c {
            '\'' | '"' | '`' => quote = Some(c),
            '(' | '[' | '{' | '<' => depth += 1,
            '>' if prev == '=' => {}
            ')' | ']' | '}' | '>' => depth -= 1,
            c if c == sep && depth == 0 => {
                parts.push(&text[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
        prev = c;
    }
    parts.push(&text[start..]);
    parts
}

/// Classify a raw type annotation.
pub fn classify_raw_type(raw: &str) -> TypeInfo {
    let members: Vec<&str> = split_top_level(raw.trim(), '|')
        .into_iter()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .collect();

    let concrete: Vec<&str> = members
        .iter()
        .copied()
        .filter(|m| *m != "null" && *m != "undefined")
        .collect();
    let nullable = concrete.len() < members.len();

    match concrete.as_slice() {
        [] => TypeInfo {
            ty: PropertyType::Other(raw.trim().to_string()),
            nullable,
            possible_values: None,
            array_type: None,
        },
        [single] => {
            let (ty, array_type) = classify_single(single);
            TypeInfo {
                ty,
                nullable,
                possible_values: None,
                array_type,
            }
        }
        many => {
            let literals: Option<Vec<serde_json::Value>> =
                many.iter().map(|m| parse_literal(m)).collect();

            match literals {
                Some(values) if values.iter().all(serde_json::Value::is_boolean) => TypeInfo {
                    ty: PropertyType::Boolean,
                    nullable,
                    possible_values: None,
                    array_type: None,
                },
                possible_values => TypeInfo {
                    ty: PropertyType::Union,
                    nullable,
                    possible_values,
                    array_type: None,
                },
            }
        }
    }
}

/// Classify one union member.
fn classify_single(member: &str) -> (PropertyType, Option<PropertyType>) {
    let member = member.trim();

    if let Some(element) = member.strip_suffix("[]") {
        let element = strip_parens(element);
        return (PropertyType::Array, Some(classify_raw_type(element).ty));
    }
    for prefix in ["Array<", "ReadonlyArray<"] {
        if let Some(inner) = member.strip_prefix(prefix).and_then(|m| m.strip_suffix('>')) {
            return (PropertyType::Array, Some(classify_raw_type(inner).ty));
        }
    }

    let ty = match member {
        "string" | "String" => PropertyType::String,
        "number" | "Number" | "bigint" => PropertyType::Number,
        "boolean" | "Boolean" => PropertyType::Boolean,
        "Date" => PropertyType::Date,
        "object" | "Object" => PropertyType::Object,
        m if m.starts_with('{') || m.starts_with("Record<") => PropertyType::Object,
        m => match parse_literal(m) {
            Some(serde_json::Value::String(_)) => PropertyType::String,
            Some(serde_json::Value::Number(_)) => PropertyType::Number,
            Some(serde_json::Value::Bool(_)) => PropertyType::Boolean,
            _ => PropertyType::Other(strip_parens(m).to_string()),
        },
    };

    (ty, None)
}

#[inline]
fn strip_parens(s: &str) -> &str {
    let s = s.trim();
    s.strip_prefix('(')
        .and_then(|inner| inner.strip_suffix(')'))
        .map(str::trim)
        .unwrap_or(s)
}

/// Parse a literal type member: quoted string, number, `true` or `false`.
pub(crate) fn parse_literal(member: &str) -> Option<serde_json::Value> {
    let member = member.trim();

    match member {
        "true" => return Some(serde_json::Value::Bool(true)),
        "false" => return Some(serde_json::Value::Bool(false)),
        _ => {}
    }

    for quote in ['\'', '"', '`'] {
        if member.len() >= 2 && member.starts_with(quote) && member.ends_with(quote) {
            let inner = &member[1..member.len() - 1];
            if quote == '`' && inner.contains("${") {
                return None;
            }
            return Some(serde_json::Value::String(inner.to_string()));
        }
    }

    if let Ok(int) = member.parse::<i64>() {
        return Some(serde_json::Value::from(int));
    }
    member
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .and_then(serde_json::Number::from_f64)
        .map(serde_json::Value::Number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_line_interface() {
        let dtos = analyze_dtos("interface User { /** @minLength 3 */ name: string }");
        assert_eq!(dtos.len(), 1);
        let name = &dtos[0].properties[0];
        assert_eq!(name.name, "name");
        assert_eq!(name.ty, PropertyType::String);
        assert_eq!(name.jsdoc.as_deref(), Some("@minLength 3"));
        assert_eq!(name.description, None);
    }

    #[test]
    fn test_multi_line_interface() {
        let source = r#"
/** A registered user. Created on signup. */
export interface User extends Entity, Auditable<User> {
  /**
   * Display name.
   * @maxLength 80
   */
  name: string;
  email?: string;
  readonly id: number;
  nickname: string | null;
  role: 'admin' | 'user' | 'guest';
  tags: string[];
  scores: Array<number>;
  address: Address;
}
"#;
        let dtos = analyze_dtos(source);
        assert_eq!(dtos.len(), 1);

        let user = &dtos[0];
        assert_eq!(user.name, "User");
        assert_eq!(user.kind, DtoKind::Interface);
        assert_eq!(
            user.extends,
            Some(vec!["Entity".to_string(), "Auditable".to_string()])
        );
        assert_eq!(user.description.as_deref(), Some("A registered user."));
        assert_eq!(user.properties.len(), 8);

        let name = user.property("name").unwrap();
        assert_eq!(name.description.as_deref(), Some("Display name."));
        assert!(name.jsdoc.as_deref().unwrap().contains("@maxLength 80"));

        assert!(user.property("email").unwrap().optional);
        assert!(user.property("id").unwrap().readonly);

        let nickname = user.property("nickname").unwrap();
        assert!(nickname.nullable);
        assert_eq!(nickname.ty, PropertyType::String);

        let role = user.property("role").unwrap();
        assert_eq!(role.ty, PropertyType::Union);
        assert_eq!(
            role.possible_values,
            Some(vec![json!("admin"), json!("user"), json!("guest")])
        );

        assert_eq!(
            user.property("tags").unwrap().array_type,
            Some(PropertyType::String)
        );
        assert_eq!(
            user.property("scores").unwrap().array_type,
            Some(PropertyType::Number)
        );
        assert_eq!(
            user.property("address").unwrap().ty,
            PropertyType::Other("Address".to_string())
        );
    }

    #[test]
    fn test_type_alias_and_class() {
        let source = r#"
type Point = {
  x: number;
  y: number;
};

export class Order extends BaseEntity implements Serializable {
  private readonly total: number = 0;
  status: 'open' | 'paid' = 'open';
  save(): void {
    const inner = { a: 1 };
  }
}
"#;
        let dtos = analyze_dtos(source);
        assert_eq!(dtos.len(), 2);
        assert_eq!(dtos[0].name, "Point");
        assert_eq!(dtos[0].kind, DtoKind::Type);
        assert_eq!(dtos[0].properties.len(), 2);

        let order = &dtos[1];
        assert_eq!(order.kind, DtoKind::Class);
        assert_eq!(order.extends, Some(vec!["BaseEntity".to_string()]));
        assert_eq!(order.properties.len(), 2);

        let total = order.property("total").unwrap();
        assert!(total.readonly);
        assert_eq!(total.default_value.as_deref(), Some("0"));

        let status = order.property("status").unwrap();
        assert_eq!(status.raw_type, "'open' | 'paid'");
        assert_eq!(status.default_value.as_deref(), Some("'open'"));
    }

    #[test]
    fn test_union_with_type_name_has_no_possible_values() {
        let info = classify_raw_type("'auto' | Size");
        assert_eq!(info.ty, PropertyType::Union);
        assert_eq!(info.possible_values, None);
    }

    #[test]
    fn test_numeric_literal_union() {
        let info = classify_raw_type("1 | 2 | 3");
        assert_eq!(
            info.possible_values,
            Some(vec![json!(1), json!(2), json!(3)])
        );
    }

    #[test]
    fn test_boolean_literal_union_is_boolean() {
        let info = classify_raw_type("true | false");
        assert_eq!(info.ty, PropertyType::Boolean);
        assert_eq!(info.possible_values, None);
    }

    #[test]
    fn test_function_type_is_not_a_default() {
        let dtos = analyze_dtos("interface Props {\n  onClick: (id: number) => void;\n}");
        let prop = &dtos[0].properties[0];
        assert_eq!(prop.raw_type, "(id: number) => void");
        assert_eq!(prop.default_value, None);
    }

    #[test]
    fn test_nested_object_literal_is_collapsed() {
        let source = r#"
interface Profile {
  address: {
    street: string;
    city: string;
  };
  age: number;
}
"#;
        let dtos = analyze_dtos(source);
        let names: Vec<&str> = dtos[0].properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["address", "age"]);
        assert_eq!(dtos[0].properties[0].raw_type, "{}");
        assert_eq!(dtos[0].properties[0].ty, PropertyType::Object);
    }

    #[test]
    fn test_inline_object_literal() {
        let dtos = analyze_dtos("type Box = { size: { w: number; h: number }; label: string }");
        let props = &dtos[0].properties;
        assert_eq!(props.len(), 2);
        assert_eq!(props[0].raw_type, "{ w: number; h: number }");
        assert_eq!(props[0].ty, PropertyType::Object);
    }

    #[test]
    fn test_no_declarations() {
        assert!(analyze_dtos("const x = 1;").is_empty());
    }

    #[test]
    fn test_find_dto_not_found() {
        let err = find_dto("interface A { a: string }", "B").unwrap_err();
        match err {
            InferenceError::DtoNotFound { name, available } => {
                assert_eq!(name, "B");
                assert_eq!(available, vec!["A".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_extract_script_from_sfc() {
        let sfc = r#"
<template><div /></template>
<script setup lang="ts">
interface Props { title: string }
</script>
"#;
        assert_eq!(list_dtos(sfc), vec!["Props".to_string()]);
    }

    #[test]
    fn test_resolve_inherited() {
        let source = r#"
interface Entity { id: number; createdAt: Date }
interface Named extends Entity { name: string }
interface User extends Named { name: string; email: string }
"#;
        let dtos = analyze_dtos(source);
        let user = dtos.iter().find(|d| d.name == "User").unwrap();
        let resolved = resolve_inherited(user, &dtos);
        let names: Vec<&str> = resolved.properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["id", "createdAt", "name", "email"]);
    }

    #[test]
    fn test_resolve_inherited_cycle() {
        let source = "interface A extends B { a: string }\ninterface B extends A { b: string }";
        let dtos = analyze_dtos(source);
        let resolved = resolve_inherited(&dtos[0], &dtos);
        let names: Vec<&str> = resolved.properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_jsdoc_description_first_sentence() {
        assert_eq!(
            jsdoc_description("User email. Used for login.\n@email"),
            Some("User email.".to_string())
        );
        assert_eq!(jsdoc_description("@required"), None);
    }
}
