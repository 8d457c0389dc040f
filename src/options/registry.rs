/// The option registry: names, descriptions, argument requirements and the
/// running display width used by the usage formatter.
use std::collections::{HashMap, HashSet};

/// Leading character that marks a token as an option.
pub const MARKER: char = '-';

/// Width of the `" <" ... ">"` decoration around an argument label.
const LABEL_DECORATION: usize = 3;

/// Registered options, in registration order.
///
/// Populate it once at startup, then hand it to [`parse`](Self::parse) and
/// [`render_usage`](Self::render_usage). There is no removal.
#[derive(Debug, Clone, Default)]
pub struct OptionRegistry {
    /// Display order. A name registered twice appears twice.
    order: Vec<String>,
    descriptions: HashMap<String, String>,
    requires_argument: HashSet<String>,
    argument_labels: HashMap<String, String>,
    max_width: usize,
}

/// Read-only view of one registered option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSpec<'a> {
    /// Option name including the marker, e.g. `-o`.
    pub name: &'a str,
    /// Single-line help text.
    pub description: &'a str,
    /// Argument label when the option takes a value.
    pub argument: Option<&'a str>,
}

impl OptionSpec<'_> {
    /// The token shown in the usage column: `name` or `name <label>`.
    #[must_use]
    pub fn display_token(&self) -> String {
        match self.argument {
            Some(label) => format!("{} <{label}>", self.name),
            None => self.name.to_owned(),
        }
    }
}

impl OptionRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an option that takes no argument.
    pub fn register_flag(&mut self, name: impl Into<String>, description: impl Into<String>) {
        let name = name.into();
        self.bump_width(display_width(&name));
        self.requires_argument.remove(&name);
        self.argument_labels.remove(&name);
        self.descriptions.insert(name.clone(), description.into());
        self.order.push(name);
    }

    /// Register an option that consumes the following token as its value.
    ///
    /// `argument_label` is a one or two word description of the value, shown
    /// as `name <label>` in usage output.
    pub fn register_value_option(
        &mut self,
        name: impl Into<String>,
        argument_label: impl Into<String>,
        description: impl Into<String>,
    ) {
        let name = name.into();
        let label = argument_label.into();
        self.bump_width(display_width(&name) + LABEL_DECORATION + display_width(&label));
        self.requires_argument.insert(name.clone());
        self.argument_labels.insert(name.clone(), label);
        self.descriptions.insert(name.clone(), description.into());
        self.order.push(name);
    }

    fn bump_width(&mut self, width: usize) {
        if width > self.max_width {
            self.max_width = width;
        }
    }

    /// Widest display token over everything registered so far.
    #[must_use]
    pub fn max_width(&self) -> usize {
        self.max_width
    }

    /// Number of display entries (duplicates counted).
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Whether `name` is a registered option.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.descriptions.contains_key(name)
    }

    #[must_use]
    pub fn requires_argument(&self, name: &str) -> bool {
        self.requires_argument.contains(name)
    }

    #[must_use]
    pub fn description(&self, name: &str) -> Option<&str> {
        self.descriptions.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn argument_label(&self, name: &str) -> Option<&str> {
        self.argument_labels.get(name).map(String::as_str)
    }

    /// Distinct registered names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.descriptions.keys().map(String::as_str)
    }

    /// Registered options in display order.
    ///
    /// A duplicated name yields one entry per registration, each carrying the
    /// metadata of the last registration.
    pub fn iter(&self) -> impl Iterator<Item = OptionSpec<'_>> {
        self.order.iter().map(|name| OptionSpec {
            name,
            description: self.description(name).unwrap_or_default(),
            argument: if self.requires_argument(name) {
                self.argument_label(name)
            } else {
                None
            },
        })
    }
}

/// Column width of `s` as the usage formatter pads it.
pub(crate) fn display_width(s: &str) -> usize {
    s.chars().count()
}
