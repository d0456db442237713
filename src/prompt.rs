//! Interactive package selection.
//!
//! One multi-select checklist per catalog category. Each choice carries the
//! package identifier next to its display label, so a selection never has to
//! be recovered by parsing the label text.

use dialoguer::{MultiSelect, theme::ColorfulTheme};
use tracing::{debug, warn};

use crate::catalog::{Catalog, Package};

/// A checklist entry: what is shown, and the package name it stands for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    pub value: String,
}

impl Choice {
    /// Choice for a catalog package, labelled `name - desc` when a description exists
    pub fn for_package(package: &Package) -> Self {
        let label = match package.desc.as_deref().map(str::trim) {
            Some(desc) if !desc.is_empty() => format!("{} - {}", package.name, desc),
            _ => package.name.clone(),
        };
        Self {
            label,
            value: package.name.clone(),
        }
    }
}

/// Source of per-category selections.
///
/// Implementations return the `value` of every chosen entry. An aborted or
/// unanswered prompt returns an empty vector.
pub trait MultiSelectPrompt {
    fn prompt_multi_select(&mut self, category: &str, choices: &[Choice]) -> Vec<String>;
}

/// Terminal checklist backed by `dialoguer`
#[derive(Debug, Default, Clone, Copy)]
pub struct DialoguerPrompt;

impl MultiSelectPrompt for DialoguerPrompt {
    fn prompt_multi_select(&mut self, category: &str, choices: &[Choice]) -> Vec<String> {
        let labels: Vec<&str> = choices.iter().map(|c| c.label.as_str()).collect();

        let picked = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Select {}", category))
            .items(&labels)
            .interact_opt();

        match picked {
            Ok(Some(indices)) => indices
                .into_iter()
                .filter_map(|i| choices.get(i))
                .map(|c| c.value.clone())
                .collect(),
            Ok(None) => {
                warn!("Selection for {:?} aborted, nothing selected", category);
                Vec::new()
            }
            Err(e) => {
                warn!("Prompt for {:?} failed, nothing selected: {}", category, e);
                Vec::new()
            }
        }
    }
}

/// Prompt once per category, in catalog order, and concatenate the answers.
///
/// Categories without packages are not prompted.
pub fn collect_selection(catalog: &Catalog, prompt: &mut dyn MultiSelectPrompt) -> Vec<String> {
    let mut selection = Vec::new();

    for category in catalog.categories() {
        if category.packages.is_empty() {
            debug!("Category {:?} is empty, not prompting", category.name);
            continue;
        }

        let choices: Vec<Choice> = category.packages.iter().map(Choice::for_package).collect();
        let picked = prompt.prompt_multi_select(&category.name, &choices);
        debug!("{:?}: selected {:?}", category.name, picked);
        selection.extend(picked);
    }

    selection
}
