#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use serde::Serialize;

use crate::candidates::CommandModel;
use crate::classify::{classify, TokenClass};
use crate::rank::{most_similar, strip_markers, DEFAULT_THRESHOLD};

/// Outcome of one suggestion query. The variant tells the caller which
/// display template applies; `Nothing` means "fall back to usage help".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "names", rename_all = "snake_case")]
pub enum Suggestion {
    Options(Vec<String>),
    Subcommands(Vec<String>),
    Nothing,
}

impl Suggestion {
    /// The suggested names regardless of template, `None` for `Nothing`.
    #[must_use]
    pub fn names(&self) -> Option<&[String]> {
        match self {
            Self::Options(names) | Self::Subcommands(names) => Some(names),
            Self::Nothing => None,
        }
    }
}

/// Run the full pipeline with the default threshold: classify `token`
/// against the model's visible names, rank the chosen pool, truncate to 3.
#[must_use]
pub fn suggestions(token: &str, model: &CommandModel) -> Suggestion {
    suggestions_with_threshold(token, model, DEFAULT_THRESHOLD)
}

#[must_use]
pub fn suggestions_with_threshold(token: &str, model: &CommandModel, threshold: f64) -> Suggestion {
    let option_names = model.visible_option_names();
    let subcommand_names = model.visible_subcommand_names();
    let class = classify(token, &option_names, &subcommand_names);

    let ranked = match class {
        // Option tokens are scored without their leading marker characters.
        TokenClass::OptionLike => most_similar(strip_markers(token), &option_names, threshold),
        TokenClass::SubcommandLike => most_similar(token, &subcommand_names, threshold),
        TokenClass::Neither => Vec::new(),
    };
    tracing::debug!(
        token,
        class = %class,
        found = ranked.len(),
        "ranked suggestion candidates"
    );

    if ranked.is_empty() {
        return Suggestion::Nothing;
    }
    match class {
        TokenClass::OptionLike => Suggestion::Options(ranked),
        TokenClass::SubcommandLike => Suggestion::Subcommands(ranked),
        TokenClass::Neither => Suggestion::Nothing,
    }
}

#[cfg(test)]
mod tests {
    use super::{suggestions, suggestions_with_threshold, Suggestion};
    use crate::candidates::{CommandModel, OptionCandidate, SubcommandCandidate};

    fn given_options(names: &[&str]) -> CommandModel {
        CommandModel::from_names(names, &[])
    }

    #[test]
    fn when_an_option_typo_is_close_then_possible_solutions_are_offered() {
        let model = given_options(&["--foo", "--bar"]);

        let suggestion = suggestions("--foa", &model);

        assert_eq!(suggestion, Suggestion::Options(vec!["--foo".to_string()]));
    }

    #[test]
    fn when_the_typo_is_an_infix_then_the_containing_option_is_found() {
        let model = given_options(&["--bufferings", "--algorithm"]);

        let suggestion = suggestions("--uff", &model);

        assert_eq!(
            suggestion,
            Suggestion::Options(vec!["--bufferings".to_string()])
        );
    }

    #[test]
    fn when_a_subcommand_typo_is_close_then_did_you_mean_is_offered() {
        let mut model = CommandModel::new();
        model.add_option(OptionCandidate::new(&["--git-dir"]));
        model.add_subcommand(SubcommandCandidate::new("commit"));
        model.add_subcommand(SubcommandCandidate::new("squash"));

        let suggestion = suggestions("mmit", &model);

        assert_eq!(
            suggestion,
            Suggestion::Subcommands(vec!["commit".to_string()])
        );
    }

    #[test]
    fn when_two_options_tie_then_both_surface_in_declaration_order() {
        let model = given_options(&["--ab123", "--ab234", "--ac123"]);

        let suggestion = suggestions("--abx", &model);

        assert_eq!(
            suggestion,
            Suggestion::Options(vec!["--ab123".to_string(), "--ab234".to_string()])
        );
    }

    #[test]
    fn when_only_one_option_shares_the_pair_then_it_alone_surfaces() {
        let model = given_options(&["--ab123", "--ab234", "--ac123"]);

        let suggestion = suggestions("--ac", &model);

        assert_eq!(suggestion, Suggestion::Options(vec!["--ac123".to_string()]));
    }

    #[test]
    fn when_the_token_is_numeric_then_nothing_is_offered() {
        let model = given_options(&["--foo", "--bar"]);

        assert_eq!(suggestions("-42", &model), Suggestion::Nothing);
        assert_eq!(suggestions("-3.5", &model), Suggestion::Nothing);
    }

    #[test]
    fn when_the_token_is_one_character_then_nothing_is_offered() {
        let model = given_options(&["--foo"]);

        assert_eq!(suggestions("f", &model), Suggestion::Nothing);
    }

    #[test]
    fn when_hidden_candidates_exist_then_they_never_surface() {
        let mut model = CommandModel::new();
        model.add_option(OptionCandidate::new(&["--foo"]));
        model.add_option(OptionCandidate::hidden(&["--foa-internal"]));
        model.add_subcommand(SubcommandCandidate::hidden("commit-internal"));

        let suggestion = suggestions("--foa", &model);

        assert_eq!(suggestion, Suggestion::Options(vec!["--foo".to_string()]));
    }

    #[test]
    fn when_no_candidate_is_similar_then_nothing_is_offered() {
        let model = given_options(&["--north", "--south"]);

        assert_eq!(suggestions("--xyzzy", &model), Suggestion::Nothing);
    }

    #[test]
    fn when_pools_are_empty_then_nothing_is_offered() {
        let model = CommandModel::new();

        assert_eq!(suggestions("--foa", &model), Suggestion::Nothing);
        assert_eq!(suggestions("commit", &model), Suggestion::Nothing);
    }

    #[test]
    fn when_the_threshold_is_raised_then_weak_matches_are_dropped() {
        let model = given_options(&["--foo", "--bar"]);

        assert_eq!(
            suggestions_with_threshold("--foa", &model, 0.99),
            Suggestion::Nothing
        );
    }

    #[test]
    fn when_the_query_repeats_then_the_result_is_identical() {
        let model = given_options(&["--ab123", "--ab234", "--ac123"]);

        assert_eq!(suggestions("--abx", &model), suggestions("--abx", &model));
    }

    #[test]
    fn when_names_are_requested_then_the_template_does_not_matter() {
        let model = given_options(&["--foo"]);

        let suggestion = suggestions("--foa", &model);

        assert_eq!(
            suggestion.names().map(<[String]>::len),
            Some(1)
        );
        assert_eq!(Suggestion::Nothing.names(), None);
    }

    #[test]
    fn when_aliases_exist_then_each_alias_is_a_separate_candidate() {
        let mut model = CommandModel::new();
        model.add_option(OptionCandidate::new(&["-m", "--message"]));

        let suggestion = suggestions("--mesage", &model);

        assert_eq!(
            suggestion,
            Suggestion::Options(vec!["--message".to_string()])
        );
    }
}
