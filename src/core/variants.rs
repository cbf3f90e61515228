use crate::core::Reaction;
use crate::domain::model::ColleagueKind;
use crate::utils::error::Result;
use std::cell::RefCell;
use std::rc::Rc;

/// Shared in-memory sink for reaction output.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    lines: Rc<RefCell<Vec<String>>>,
}

impl Transcript {
    pub fn push(&self, line: String) {
        self.lines.borrow_mut().push(line);
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }
}

/// Where a reaction writes its line.
#[derive(Debug, Clone, Default)]
pub enum Output {
    #[default]
    Stdout,
    Transcript(Transcript),
}

impl Output {
    pub fn emit(&self, line: String) {
        match self {
            Self::Stdout => println!("{}", line),
            Self::Transcript(transcript) => transcript.push(line),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DesktopReaction {
    output: Output,
}

impl DesktopReaction {
    pub fn new(output: Output) -> Self {
        Self { output }
    }
}

impl Reaction for DesktopReaction {
    fn label(&self) -> &str {
        "Colleague"
    }

    fn react(&self, message: &str) -> Result<()> {
        self.output.emit(format!("Colleague Received: {}", message));
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MobileReaction {
    output: Output,
}

impl MobileReaction {
    pub fn new(output: Output) -> Self {
        Self { output }
    }
}

impl Reaction for MobileReaction {
    fn label(&self) -> &str {
        "MobileColleague"
    }

    fn react(&self, message: &str) -> Result<()> {
        self.output.emit(format!("MobileColleague Received: {}", message));
        Ok(())
    }
}

impl ColleagueKind {
    pub fn reaction(self, output: Output) -> Box<dyn Reaction> {
        match self {
            Self::Desktop => Box::new(DesktopReaction::new(output)),
            Self::Mobile => Box::new(MobileReaction::new(output)),
        }
    }
}
