//! Questionnaire that turns user answers into [`Answers`].
//!
//! The conversation is an ordered list of [`Question`]s. Each one produces a
//! typed [`PromptRequest`] that any [`PromptProvider`] front-end can answer.
//! Some questions are only asked when an earlier answer calls for them, e.g.
//! the carousel confirmation only follows a component list that contains the
//! carousel.

use crate::config::Answers;
use crate::error::{Error, Result};
use crate::request::Feature;
use crate::resolver::ConfigResolver;
use crate::templates::{catalog, LanguageVariant};

/// Capability set every prompt front-end provides
pub trait PromptProvider {
    /// Pick one of `choices`, returning its index
    fn ask_choice(&mut self, message: &str, choices: &[String], default: usize) -> Result<usize>;

    /// Pick any number of `choices`, returning their indices
    fn ask_multi_choice(&mut self, message: &str, choices: &[String]) -> Result<Vec<usize>>;

    /// Free text, typically a comma separated list of names
    fn ask_list(&mut self, message: &str) -> Result<String>;

    fn ask_confirm(&mut self, message: &str, default: bool) -> Result<bool>;
}

/// A single typed prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptRequest {
    Choice {
        message: &'static str,
        choices: Vec<String>,
        default: usize,
    },
    MultiChoice {
        message: &'static str,
        choices: Vec<String>,
    },
    List {
        message: &'static str,
    },
    Confirm {
        message: &'static str,
        default: bool,
    },
}

/// Answer to a [`PromptRequest`], same shape as the request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptAnswer {
    Choice(usize),
    MultiChoice(Vec<usize>),
    List(String),
    Confirm(bool),
}

impl PromptRequest {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Choice { message, .. }
            | Self::MultiChoice { message, .. }
            | Self::List { message }
            | Self::Confirm { message, .. } => *message,
        }
    }

    /// Ask this request through `provider`
    pub fn ask(&self, provider: &mut dyn PromptProvider) -> Result<PromptAnswer> {
        Ok(match self {
            Self::Choice {
                message,
                choices,
                default,
            } => PromptAnswer::Choice(provider.ask_choice(message, choices, *default)?),
            Self::MultiChoice { message, choices } => {
                PromptAnswer::MultiChoice(provider.ask_multi_choice(message, choices)?)
            }
            Self::List { message } => PromptAnswer::List(provider.ask_list(message)?),
            Self::Confirm { message, default } => {
                PromptAnswer::Confirm(provider.ask_confirm(message, *default)?)
            }
        })
    }
}

/// Every question of the scaffolding conversation, in the order asked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Question {
    Language,
    Features,
    InstallDependencies,
    InitGit,
    PageNames,
    AllEssentialComponents,
    ComponentNames,
    CarouselDependencies,
    ApiRouteNames,
}

impl Question {
    pub const ORDER: [Question; 9] = [
        Question::Language,
        Question::Features,
        Question::InstallDependencies,
        Question::InitGit,
        Question::PageNames,
        Question::AllEssentialComponents,
        Question::ComponentNames,
        Question::CarouselDependencies,
        Question::ApiRouteNames,
    ];

    /// Whether this question is asked given the answers collected so far
    pub fn applies(&self, answers: &Answers) -> bool {
        match self {
            Self::Language | Self::Features | Self::InstallDependencies | Self::InitGit => true,
            Self::PageNames => answers.has_feature(Feature::Pages),
            Self::AllEssentialComponents => answers.has_feature(Feature::Components),
            Self::ComponentNames => {
                answers.has_feature(Feature::Components) && !answers.all_essential_components
            }
            Self::CarouselDependencies => {
                answers.has_feature(Feature::Components)
                    && ConfigResolver::requested_components(answers)
                        .iter()
                        .any(|name| name == catalog::CAROUSEL_COMPONENT)
            }
            Self::ApiRouteNames => answers.has_feature(Feature::ApiRoutes),
        }
    }

    pub fn request(&self) -> PromptRequest {
        match self {
            Self::Language => PromptRequest::Choice {
                message: "Which language would you like to use?",
                choices: LanguageVariant::all().map(|v| v.label().to_string()).collect(),
                default: 0,
            },
            Self::Features => PromptRequest::MultiChoice {
                message: "Which features would you like to include?",
                choices: Feature::all().map(|f| f.label().to_string()).collect(),
            },
            Self::InstallDependencies => PromptRequest::Confirm {
                message: "Would you like to install dependencies automatically?",
                default: true,
            },
            Self::InitGit => PromptRequest::Confirm {
                message: "Would you like to initialize a Git repository?",
                default: true,
            },
            Self::PageNames => PromptRequest::List {
                message: "Enter page names (comma separated):",
            },
            Self::AllEssentialComponents => PromptRequest::Confirm {
                message: "Create all essential components?",
                default: true,
            },
            Self::ComponentNames => PromptRequest::List {
                message: "Enter component names (comma separated):",
            },
            Self::CarouselDependencies => PromptRequest::Confirm {
                message: "Would you like to install react-slick and slick-carousel?",
                default: true,
            },
            Self::ApiRouteNames => PromptRequest::List {
                message: "Enter API route names (comma separated):",
            },
        }
    }

    /// Store `answer` in `answers`. Fails if the answer has the wrong shape.
    pub fn record(&self, answers: &mut Answers, answer: PromptAnswer) -> Result<()> {
        match (self, answer) {
            (Self::Language, PromptAnswer::Choice(index)) => {
                answers.language = LanguageVariant::all()
                    .nth(index)
                    .ok_or_else(|| Error::prompt(format!("Invalid language choice: {}", index)))?;
            }
            (Self::Features, PromptAnswer::MultiChoice(indices)) => {
                let all: Vec<Feature> = Feature::all().collect();
                answers.features = indices
                    .into_iter()
                    .map(|i| {
                        all.get(i)
                            .copied()
                            .ok_or_else(|| Error::prompt(format!("Invalid feature choice: {}", i)))
                    })
                    .collect::<Result<_>>()?;
            }
            (Self::InstallDependencies, PromptAnswer::Confirm(yes)) => {
                answers.install_dependencies = yes
            }
            (Self::InitGit, PromptAnswer::Confirm(yes)) => answers.init_git = yes,
            (Self::PageNames, PromptAnswer::List(text)) => answers.pages = vec![text],
            (Self::AllEssentialComponents, PromptAnswer::Confirm(yes)) => {
                answers.all_essential_components = yes
            }
            (Self::ComponentNames, PromptAnswer::List(text)) => answers.components = vec![text],
            (Self::CarouselDependencies, PromptAnswer::Confirm(yes)) => {
                answers.confirm_carousel_deps = yes
            }
            (Self::ApiRouteNames, PromptAnswer::List(text)) => answers.api_routes = vec![text],
            (question, answer) => {
                return Err(Error::prompt(format!(
                    "Answer {:?} does not fit question {:?}",
                    answer, question
                )));
            }
        }
        Ok(())
    }
}

/// Runs the questions in order against a prompt front-end
pub struct Questionnaire<'p> {
    provider: &'p mut dyn PromptProvider,
}

impl<'p> Questionnaire<'p> {
    pub fn new(provider: &'p mut dyn PromptProvider) -> Self {
        Self { provider }
    }

    pub fn run(self) -> Result<Answers> {
        let provider = self.provider;
        let mut answers = Answers::default();
        for question in Question::ORDER {
            if !question.applies(&answers) {
                log::debug!("Skipping question {:?}", question);
                continue;
            }
            let answer = question.request().ask(provider)?;
            question.record(&mut answers, answer)?;
        }
        Ok(answers)
    }
}

/// Prompt provider that replays canned answers, for tests and automation
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompt {
    answers: std::collections::VecDeque<PromptAnswer>,
    /// Messages asked so far, in order
    pub asked: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new(answers: impl IntoIterator<Item = PromptAnswer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            asked: Vec::new(),
        }
    }

    fn next(&mut self, message: &str) -> Result<PromptAnswer> {
        self.asked.push(message.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| Error::prompt(format!("No scripted answer for: {}", message)))
    }
}

impl PromptProvider for ScriptedPrompt {
    fn ask_choice(&mut self, message: &str, _choices: &[String], _default: usize) -> Result<usize> {
        match self.next(message)? {
            PromptAnswer::Choice(i) => Ok(i),
            other => Err(Error::prompt(format!("Expected a choice, got {:?}", other))),
        }
    }

    fn ask_multi_choice(&mut self, message: &str, _choices: &[String]) -> Result<Vec<usize>> {
        match self.next(message)? {
            PromptAnswer::MultiChoice(v) => Ok(v),
            other => Err(Error::prompt(format!("Expected choices, got {:?}", other))),
        }
    }

    fn ask_list(&mut self, message: &str) -> Result<String> {
        match self.next(message)? {
            PromptAnswer::List(s) => Ok(s),
            other => Err(Error::prompt(format!("Expected text, got {:?}", other))),
        }
    }

    fn ask_confirm(&mut self, message: &str, _default: bool) -> Result<bool> {
        match self.next(message)? {
            PromptAnswer::Confirm(b) => Ok(b),
            other => Err(Error::prompt(format!("Expected yes/no, got {:?}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PromptAnswer::*;

    fn features(list: &[Feature]) -> PromptAnswer {
        let all: Vec<_> = Feature::all().collect();
        MultiChoice(
            list.iter()
                .map(|f| all.iter().position(|x| x == f).unwrap())
                .collect(),
        )
    }

    #[test]
    fn test_full_conversation_order() {
        let mut prompt = ScriptedPrompt::new([
            Choice(1),
            features(&[Feature::Pages, Feature::Components, Feature::ApiRoutes]),
            Confirm(false),
            Confirm(true),
            List("home, about".into()),
            Confirm(false),
            List("Carousel, Sidebar".into()),
            Confirm(true),
            List("users".into()),
        ]);

        let answers = Questionnaire::new(&mut prompt).run().unwrap();

        let expected: Vec<&str> = Question::ORDER
            .iter()
            .map(|q| q.request().message())
            .collect();
        assert_eq!(prompt.asked, expected);

        assert_eq!(answers.language, LanguageVariant::Typed);
        assert!(!answers.install_dependencies);
        assert!(answers.init_git);
        assert_eq!(answers.pages, vec!["home, about"]);
        assert_eq!(answers.components, vec!["Carousel, Sidebar"]);
        assert!(answers.confirm_carousel_deps);
        assert_eq!(answers.api_routes, vec!["users"]);
    }

    #[test]
    fn test_carousel_prompt_only_when_requested() {
        let mut prompt = ScriptedPrompt::new([
            Choice(0),
            features(&[Feature::Components]),
            Confirm(true),
            Confirm(true),
            Confirm(false),
            List("Button, Sidebar".into()),
        ]);

        let answers = Questionnaire::new(&mut prompt).run().unwrap();
        assert_eq!(prompt.asked.len(), 6);
        assert!(!prompt
            .asked
            .iter()
            .any(|m| m == Question::CarouselDependencies.request().message()));
        assert!(!answers.confirm_carousel_deps);
    }

    #[test]
    fn test_essential_components_skip_name_prompt() {
        let mut prompt = ScriptedPrompt::new([
            Choice(0),
            features(&[Feature::Components]),
            Confirm(false),
            Confirm(false),
            Confirm(true),
            Confirm(false),
        ]);

        let answers = Questionnaire::new(&mut prompt).run().unwrap();
        assert_eq!(
            prompt.asked.last().map(String::as_str),
            Some(Question::CarouselDependencies.request().message())
        );
        assert!(answers.all_essential_components);
        assert!(!answers.confirm_carousel_deps);
    }

    #[test]
    fn test_no_features_asks_four_questions() {
        let mut prompt =
            ScriptedPrompt::new([Choice(0), MultiChoice(vec![]), Confirm(true), Confirm(false)]);
        let answers = Questionnaire::new(&mut prompt).run().unwrap();
        assert_eq!(prompt.asked.len(), 4);
        assert!(answers.features.is_empty());
    }

    #[test]
    fn test_wrong_answer_shape_is_an_error() {
        let mut prompt = ScriptedPrompt::new([Confirm(true)]);
        let result = Questionnaire::new(&mut prompt).run();
        assert!(matches!(result, Err(Error::Prompt(_))));
    }

    #[test]
    fn test_out_of_range_choice_is_an_error() {
        let mut answers = Answers::default();
        assert!(Question::Language.record(&mut answers, Choice(7)).is_err());
        assert!(Question::Features
            .record(&mut answers, MultiChoice(vec![0, 42]))
            .is_err());
    }
}
