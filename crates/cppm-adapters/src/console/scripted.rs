//! Scripted console for tests and non-interactive runs.

use std::collections::VecDeque;

use cppm_core::{
    application::ports::{Console, Notice},
    error::CppmResult,
};

/// Answers prompts from a fixed list of lines and records the conversation.
///
/// Once the script runs out every prompt sees end of input.
#[derive(Debug, Clone, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    prompts: Vec<String>,
    notices: Vec<Notice>,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Every prompt shown, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Messages of `Notice::Error` notices only.
    pub fn errors(&self) -> Vec<&str> {
        self.notices
            .iter()
            .filter(|n| matches!(n, Notice::Error(_)))
            .map(Notice::message)
            .collect()
    }

    /// Lines not consumed yet.
    pub fn remaining(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> CppmResult<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.input.pop_front())
    }

    fn report(&mut self, notice: Notice) -> CppmResult<()> {
        self.notices.push(notice);
        Ok(())
    }
}
