//! Prompt front-ends: rich terminal widgets and a plain line-based fallback.

// Internal imports (std, crate)
use std::io::{BufRead, Write};

// External imports (alphabetized)
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Select};
use nextkit_core::{Error, PromptProvider, Result};

fn prompt_error(e: impl std::fmt::Display) -> Error {
    Error::prompt(e.to_string())
}

/// Arrow-key selection, checkboxes and confirmations via dialoguer
#[derive(Default)]
pub struct RichPrompt {
    theme: ColorfulTheme,
}

impl PromptProvider for RichPrompt {
    fn ask_choice(&mut self, message: &str, choices: &[String], default: usize) -> Result<usize> {
        Select::with_theme(&self.theme)
            .with_prompt(message)
            .items(choices)
            .default(default)
            .interact()
            .map_err(prompt_error)
    }

    fn ask_multi_choice(&mut self, message: &str, choices: &[String]) -> Result<Vec<usize>> {
        MultiSelect::with_theme(&self.theme)
            .with_prompt(message)
            .items(choices)
            .interact()
            .map_err(prompt_error)
    }

    fn ask_list(&mut self, message: &str) -> Result<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(message)
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_error)
    }

    fn ask_confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        Confirm::with_theme(&self.theme)
            .with_prompt(message)
            .default(default)
            .interact()
            .map_err(prompt_error)
    }
}

/// Numbered menus answered one line at a time.
///
/// Works without a TTY, e.g. when answers are piped in.
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Err(Error::prompt("input closed before all questions were answered"));
        }
        Ok(line.trim().to_string())
    }

    fn show_menu(&mut self, message: &str, choices: &[String]) -> Result<()> {
        writeln!(self.output, "? {}", message)?;
        for (i, choice) in choices.iter().enumerate() {
            writeln!(self.output, "  {}) {}", i + 1, choice)?;
        }
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{} ", prompt)?;
        self.output.flush()?;
        self.read_line()
    }
}

/// Parse `1`-based indices or labels (case-insensitive) into an index
fn parse_choice(token: &str, choices: &[String]) -> Option<usize> {
    match token.parse::<usize>() {
        Ok(n) if (1..=choices.len()).contains(&n) => Some(n - 1),
        Ok(_) => None,
        Err(_) => choices.iter().position(|c| c.eq_ignore_ascii_case(token)),
    }
}

impl<R: BufRead, W: Write> PromptProvider for LinePrompt<R, W> {
    fn ask_choice(&mut self, message: &str, choices: &[String], default: usize) -> Result<usize> {
        self.show_menu(message, choices)?;
        loop {
            let line = self.ask(&format!("Choice [{}]:", default + 1))?;
            if line.is_empty() {
                return Ok(default);
            }
            match parse_choice(&line, choices) {
                Some(index) => return Ok(index),
                None => writeln!(self.output, "Please pick 1-{}", choices.len())?,
            }
        }
    }

    fn ask_multi_choice(&mut self, message: &str, choices: &[String]) -> Result<Vec<usize>> {
        self.show_menu(message, choices)?;
        'ask: loop {
            let line = self.ask("Choices (comma separated, empty for none):")?;
            let mut picked = Vec::new();
            for token in line.split(',').map(str::trim).filter(|t| !t.is_empty()) {
                match parse_choice(token, choices) {
                    Some(index) if !picked.contains(&index) => picked.push(index),
                    Some(_) => {}
                    None => {
                        writeln!(self.output, "Unknown choice: {}", token)?;
                        continue 'ask;
                    }
                }
            }
            return Ok(picked);
        }
    }

    fn ask_list(&mut self, message: &str) -> Result<String> {
        writeln!(self.output, "? {}", message)?;
        self.ask(">")
    }

    fn ask_confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        let hint = if default { "(Y/n)" } else { "(y/N)" };
        loop {
            let line = self.ask(&format!("? {} {}", message, hint))?;
            match line.to_lowercase().as_str() {
                "" => return Ok(default),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.output, "Please answer y or n")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nextkit_core::{Feature, LanguageVariant, Questionnaire};
    use std::io::Cursor;

    fn line_prompt(input: &str) -> LinePrompt<Cursor<Vec<u8>>, Vec<u8>> {
        LinePrompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn choices(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_choice_by_number_label_and_default() {
        let options = choices(&["JavaScript", "TypeScript"]);
        let mut prompt = line_prompt("2\ntypescript\n\n");
        assert_eq!(prompt.ask_choice("Language?", &options, 0).unwrap(), 1);
        assert_eq!(prompt.ask_choice("Language?", &options, 0).unwrap(), 1);
        assert_eq!(prompt.ask_choice("Language?", &options, 0).unwrap(), 0);
    }

    #[test]
    fn test_choice_reasks_on_invalid_input() {
        let options = choices(&["a", "b"]);
        let mut prompt = line_prompt("9\nb\n");
        assert_eq!(prompt.ask_choice("Pick", &options, 0).unwrap(), 1);
        let output = String::from_utf8(prompt.output).unwrap();
        assert!(output.contains("Please pick 1-2"));
    }

    #[test]
    fn test_multi_choice() {
        let options = choices(&["Pages", "Components", "API Routes"]);
        let mut prompt = line_prompt("1, api routes, 1\n\n");
        assert_eq!(
            prompt.ask_multi_choice("Features?", &options).unwrap(),
            vec![0, 2]
        );
        assert!(prompt.ask_multi_choice("Features?", &options).unwrap().is_empty());
    }

    #[test]
    fn test_confirm() {
        let mut prompt = line_prompt("\nno\nmaybe\nY\n");
        assert!(prompt.ask_confirm("Install?", true).unwrap());
        assert!(!prompt.ask_confirm("Install?", true).unwrap());
        assert!(prompt.ask_confirm("Install?", false).unwrap());
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let mut prompt = line_prompt("");
        assert!(matches!(prompt.ask_list("Pages?"), Err(Error::Prompt(_))));
    }

    #[test]
    fn test_questionnaire_over_lines() {
        // language, features, install, git, pages, all essential, carousel
        let mut prompt = line_prompt("2\n1,2\nn\nn\n home, about \n\ny\n");
        let answers = Questionnaire::new(&mut prompt).run().unwrap();

        assert_eq!(answers.language, LanguageVariant::Typed);
        assert_eq!(answers.features, vec![Feature::Pages, Feature::Components]);
        assert_eq!(answers.pages, vec!["home, about"]);
        assert!(answers.all_essential_components);
        assert!(answers.confirm_carousel_deps);
        assert!(!answers.install_dependencies);
    }
}
