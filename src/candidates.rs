use serde::{Deserialize, Serialize};

/// One recognized option together with every alias it is known by.
/// Aliases are enumerated individually when the option is offered as a
/// suggestion candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionCandidate {
    names: Vec<String>,
    hidden: bool,
}

impl OptionCandidate {
    #[must_use]
    pub fn new(names: &[&str]) -> Self {
        Self {
            names: names.iter().map(ToString::to_string).collect(),
            hidden: false,
        }
    }

    #[must_use]
    pub fn hidden(names: &[&str]) -> Self {
        Self {
            names: names.iter().map(ToString::to_string).collect(),
            hidden: true,
        }
    }

    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        self.hidden
    }
}

/// One recognized subcommand name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubcommandCandidate {
    name: String,
    hidden: bool,
}

impl SubcommandCandidate {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hidden: false,
        }
    }

    #[must_use]
    pub fn hidden(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hidden: true,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        self.hidden
    }
}

/// The candidate pools of the active command context: its recognized options
/// and subcommands, in declaration order, each carrying a visibility flag.
/// Hidden entries are filtered out before any name reaches the suggestion
/// pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandModel {
    options: Vec<OptionCandidate>,
    subcommands: Vec<SubcommandCandidate>,
}

impl CommandModel {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            options: Vec::new(),
            subcommands: Vec::new(),
        }
    }

    /// Build a model where every name is a visible single-alias entry.
    #[must_use]
    pub fn from_names(option_names: &[&str], subcommand_names: &[&str]) -> Self {
        Self {
            options: option_names
                .iter()
                .map(|name| OptionCandidate::new(&[name]))
                .collect(),
            subcommands: subcommand_names
                .iter()
                .map(|name| SubcommandCandidate::new(*name))
                .collect(),
        }
    }

    pub fn add_option(&mut self, candidate: OptionCandidate) {
        self.options.push(candidate);
    }

    pub fn add_subcommand(&mut self, candidate: SubcommandCandidate) {
        self.subcommands.push(candidate);
    }

    /// Every alias of every visible option, flattened in declaration order.
    #[must_use]
    pub fn visible_option_names(&self) -> Vec<&str> {
        self.options
            .iter()
            .filter(|option| !option.hidden)
            .flat_map(|option| option.names.iter().map(String::as_str))
            .collect()
    }

    #[must_use]
    pub fn visible_subcommand_names(&self) -> Vec<&str> {
        self.subcommands
            .iter()
            .filter(|subcommand| !subcommand.hidden)
            .map(|subcommand| subcommand.name.as_str())
            .collect()
    }
}
