use indexmap::IndexMap;

/// Transient color table scoped to one conversion call.
///
/// Raw color strings are assigned symbolic names `color1`, `color2`, ... in
/// first-seen order; re-interning a string returns its existing name. Keys
/// are the raw strings as received, so `#FF0000` and `#ff0000` are distinct
/// entries.
#[derive(Debug, Default)]
pub struct Palette {
    names: IndexMap<String, String>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a raw color string and return its symbolic name.
    pub fn intern(&mut self, raw: &str) -> String {
        if let Some(name) = self.names.get(raw) {
            return name.clone();
        }
        let name = format!("color{}", self.names.len() + 1);
        self.names.insert(raw.to_string(), name.clone());
        name
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// xcolor definitions for every interned color, in assignment order.
    pub fn definitions(&self) -> Vec<String> {
        self.names
            .iter()
            .map(|(raw, name)| define_color(name, raw))
            .collect()
    }
}

/// Format one xcolor definition. Hex colors become HTML-model definitions;
/// anything else is assumed to be a name xcolor already knows and is
/// aliased with \colorlet.
fn define_color(name: &str, raw: &str) -> String {
    match normalize_hex(raw) {
        Some(hex) => format!("\\definecolor{{{name}}}{{HTML}}{{{hex}}}"),
        None => format!("\\colorlet{{{name}}}{{{raw}}}"),
    }
}

/// Normalize "#rgb" or "#rrggbb" to uppercase "RRGGBB".
///
/// The xcolor HTML model only accepts six uppercase hex digits.
fn normalize_hex(raw: &str) -> Option<String> {
    let digits = raw.strip_prefix('#')?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match digits.len() {
        6 => Some(digits.to_ascii_uppercase()),
        3 => {
            let doubled: String = digits.chars().flat_map(|c| [c, c]).collect();
            Some(doubled.to_ascii_uppercase())
        }
        _ => None,
    }
}
