//! Best-effort resolution of engine object names to canonical class names.
//!
//! The two asset pipelines that feed the simulator produce different name
//! shapes. Whole objects follow the scene-authoring convention
//! `obj_<class tokens...>_<qualifier or index>` (underscore-delimited);
//! articulated links follow `<model>-<part>_<index>`. Parsing never fails:
//! a malformed name degrades to an unrecognized string that the taxonomy
//! mints as a new class downstream.

use afford_taxonomy::Taxonomy;
use afford_types::SceneObject;

/// Remaps for asset names that do not conform to the canonical class list.
const EDGE_CASE_MAP: &[(&str, &str)] = &[
    ("LightSwitch", "Switch"),
    ("SoapDispenser", "Dispenser"),
    ("Cab", "Cabinet"),
];

/// Positional qualifiers that terminate the class token sequence.
const QUALIFIER_TOKENS: &[&str] = &["left", "right", "main", "room"];

/// Capitalizes a token: first character uppercase, rest lowercase.
fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn is_numeric(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit())
}

fn remap_edge_cases(class_name: String) -> String {
    EDGE_CASE_MAP
        .iter()
        .find(|(from, _)| *from == class_name)
        .map_or(class_name, |(_, to)| (*to).to_string())
}

/// Parses a whole-object name into a class name guess.
///
/// Splits on `_`; class tokens start after the fixed prefix token and stop
/// at the first purely-numeric token, positional qualifier, or end of
/// string. Tokens are capitalized and concatenated; a trailing
/// `-workspace` suffix is stripped case-insensitively.
///
/// # Example
///
/// ```
/// use afford_registry::resolve::parse_body_name;
///
/// assert_eq!(parse_body_name("obj_coffee_machine_3"), "CoffeeMachine");
/// assert_eq!(parse_body_name("obj_counter_main_room"), "Counter");
/// ```
#[must_use]
pub fn parse_body_name(raw: &str) -> String {
    let mut parts = raw.split('_');
    let _prefix = parts.next();

    let Some(first) = parts.next() else {
        // No class tokens at all; degrade to the capitalized raw name.
        return capitalize(raw);
    };

    let mut class_name = capitalize(first);
    for token in parts {
        if is_numeric(token) || QUALIFIER_TOKENS.contains(&token) {
            break;
        }
        class_name.push_str(&capitalize(token));
    }

    strip_workspace_suffix(&class_name)
}

fn strip_workspace_suffix(name: &str) -> String {
    const SUFFIX: &str = "-workspace";
    if name.len() >= SUFFIX.len() {
        let (head, tail) = name.split_at(name.len() - SUFFIX.len());
        if tail.eq_ignore_ascii_case(SUFFIX) {
            return head.to_string();
        }
    }
    name.to_string()
}

/// Parses an articulated-link name into a class name guess.
///
/// Takes the token before the first `_`, splits it on `-`, and capitalizes
/// the last segment.
///
/// # Example
///
/// ```
/// use afford_registry::resolve::parse_link_name;
///
/// assert_eq!(parse_link_name("drawer-Handle_0"), "Handle");
/// ```
#[must_use]
pub fn parse_link_name(raw: &str) -> String {
    let head = raw.split('_').next().unwrap_or(raw);
    let segment = head.split('-').next_back().unwrap_or(head);
    capitalize(segment)
}

/// Resolves a scene object to `(parsed class guess, display name)`.
///
/// The parsed guess goes through the edge-case remap; the display name is
/// the capitalized raw engine name, kept because engine names sometimes
/// already match the taxonomy exactly (see [`check_if_known`]).
#[must_use]
pub fn resolve_name(object: &SceneObject) -> (String, String) {
    let parsed = match object {
        SceneObject::Body { name, .. } => parse_body_name(name),
        SceneObject::Link { name, .. } => parse_link_name(name),
    };
    (remap_edge_cases(parsed), capitalize(object.name()))
}

/// Prefers the raw engine name over the parsed guess when the engine name
/// is already a recognized class — parsing would only corrupt it.
#[must_use]
pub fn check_if_known(taxonomy: &Taxonomy, parsed: String, display: String) -> String {
    if taxonomy.is_known_class(&display) {
        display
    } else {
        parsed
    }
}
