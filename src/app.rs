use log::warn;

use crate::access::{AccessGate, Registration};
use crate::models::{CourseContent, Question};
use crate::session::QuizSession;

const FIELD_INPUT_LIMIT: usize = 64;

/// Top-level tabs, one per section of the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    About,
    Materials,
    Quiz,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::About, Tab::Materials, Tab::Quiz];

    pub fn title(self) -> &'static str {
        match self {
            Tab::About => "About",
            Tab::Materials => "Materials",
            Tab::Quiz => "Quiz",
        }
    }

    fn next(self) -> Self {
        match self {
            Tab::About => Tab::Materials,
            Tab::Materials => Tab::Quiz,
            Tab::Quiz => Tab::About,
        }
    }
}

/// What the quiz tab should currently show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    /// Not registered yet; question content stays hidden.
    AwaitingAccess,
    InProgress,
    Complete,
}

/// Fields of the registration dialog, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Email,
    Password,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Email, FormField::Password];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Password => "Password",
        }
    }

    fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Email,
            FormField::Email => FormField::Password,
            FormField::Password => FormField::Name,
        }
    }

    fn previous(self) -> Self {
        match self {
            FormField::Name => FormField::Password,
            FormField::Email => FormField::Name,
            FormField::Password => FormField::Email,
        }
    }
}

/// Input state of the registration dialog.
#[derive(Debug, Default)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub focus: FormField,
    pub error: Option<String>,
}

impl RegistrationForm {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Password => &self.password,
        }
    }

    pub fn push_char(&mut self, c: char) {
        let field = self.focused_value_mut();
        if field.chars().count() < FIELD_INPUT_LIMIT {
            field.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.focused_value_mut().pop();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Build the payload for the gate, trimming stray whitespace.
    pub fn registration(&self) -> Registration {
        Registration {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        }
    }

    fn focused_value_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Password => &mut self.password,
        }
    }
}

/// Application state: the active tab, the registration gate, the quiz
/// session and the dialog, with all quiz and gate mutation delegated to
/// the core components.
pub struct App {
    content: CourseContent,
    gate: AccessGate,
    session: QuizSession,
    pub tab: Tab,
    selected_option: usize,
    form: Option<RegistrationForm>,
    notice: Option<String>,
}

impl App {
    pub fn new(content: CourseContent) -> Self {
        let session = QuizSession::new(content.questions.clone());
        Self {
            content,
            gate: AccessGate::new(),
            session,
            tab: Tab::About,
            selected_option: 0,
            form: None,
            notice: None,
        }
    }

    pub fn content(&self) -> &CourseContent {
        &self.content
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn is_registered(&self) -> bool {
        self.gate.is_registered()
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    pub fn form(&self) -> Option<&RegistrationForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut RegistrationForm> {
        self.form.as_mut()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn quiz_phase(&self) -> QuizPhase {
        if !self.gate.is_registered() {
            QuizPhase::AwaitingAccess
        } else if self.session.is_complete() {
            QuizPhase::Complete
        } else {
            QuizPhase::InProgress
        }
    }

    /// The question to display, only while the quiz is actually in progress.
    pub fn current_question(&self) -> Option<&Question> {
        match self.quiz_phase() {
            QuizPhase::InProgress => self.session.current_question(),
            _ => None,
        }
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
        self.notice = None;
    }

    pub fn next_tab(&mut self) {
        self.select_tab(self.tab.next());
    }

    pub fn select_next_option(&mut self) {
        if let Some(question) = self.current_question() {
            self.selected_option = (self.selected_option + 1) % question.options.len();
        }
    }

    pub fn select_previous_option(&mut self) {
        if let Some(question) = self.current_question() {
            let count = question.options.len();
            self.selected_option = (self.selected_option + count - 1) % count;
        }
    }

    /// Submit the highlighted option. Only acts while `InProgress`; the
    /// engine rejects anything else without touching its state.
    pub fn submit_answer(&mut self) {
        if self.quiz_phase() != QuizPhase::InProgress {
            return;
        }
        match self.session.submit_answer(self.selected_option) {
            Ok(_) => self.selected_option = 0,
            // unreachable from the keyboard, the cursor is bounded
            Err(err) => warn!("answer rejected: {err}"),
        }
        self.notice = None;
    }

    pub fn restart_quiz(&mut self) {
        self.session.reset();
        self.selected_option = 0;
    }

    pub fn open_registration(&mut self) {
        if !self.gate.is_registered() {
            self.form = Some(RegistrationForm::default());
        }
    }

    pub fn close_registration(&mut self) {
        self.form = None;
    }

    /// Submit the dialog. On success the gate opens and the dialog closes;
    /// on a validation error the dialog stays up with the message set.
    pub fn submit_registration(&mut self) {
        let Some(form) = &mut self.form else {
            return;
        };
        match self.gate.register(&form.registration()) {
            Ok(()) => {
                self.form = None;
                self.notice = Some(
                    "Registration complete. The materials and the quiz are now open.".to_string(),
                );
            }
            Err(err) => form.error = Some(err.first_message()),
        }
    }
}
