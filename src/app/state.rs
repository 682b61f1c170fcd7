use crate::config::AppConfig;
use crate::data::GalleryData;
use crate::host::Capabilities;
use chrono::{DateTime, Local};
use rand::RngExt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Inputs,
    Form,
    Data,
    Status,
    Chat,
}

impl Tab {
    pub const ALL: [Tab; 5] = [Tab::Inputs, Tab::Form, Tab::Data, Tab::Status, Tab::Chat];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Inputs => "Inputs",
            Tab::Form => "Form",
            Tab::Data => "Data",
            Tab::Status => "Status",
            Tab::Chat => "Chat",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    pub fn next(self) -> Tab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Tab {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusPanel {
    Content,
    ChatInput,
}

/// Which text field is in edit mode, capturing printable keys.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditTarget {
    WidgetText,
    FormName,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FeedbackKind {
    Success,
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct Feedback {
    pub timestamp: String,
    pub kind: FeedbackKind,
    pub text: String,
}

pub const RADIO_COLORS: &[&str] = &["Red", "Green", "Blue"];
pub const FRUITS: &[&str] = &["Apple", "Banana", "Cherry", "Dragonfruit"];
pub const TOPPINGS: &[&str] = &["Cheese", "Mushrooms", "Olives", "Onions"];
pub const SIZES: &[&str] = &["XS", "S", "M", "L", "XL"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputWidget {
    Checkbox,
    Toggle,
    Radio,
    Select,
    MultiSelect,
    Slider,
    SizeSlider,
    Number,
    Text,
}

impl InputWidget {
    pub const ALL: [InputWidget; 9] = [
        InputWidget::Checkbox,
        InputWidget::Toggle,
        InputWidget::Radio,
        InputWidget::Select,
        InputWidget::MultiSelect,
        InputWidget::Slider,
        InputWidget::SizeSlider,
        InputWidget::Number,
        InputWidget::Text,
    ];

    pub fn label(self) -> &'static str {
        match self {
            InputWidget::Checkbox => "Enable feature",
            InputWidget::Toggle => "Dark mode (demo only)",
            InputWidget::Radio => "Pick a color",
            InputWidget::Select => "Select a fruit",
            InputWidget::MultiSelect => "Select toppings",
            InputWidget::Slider => "Slider (0-100)",
            InputWidget::SizeSlider => "Select slider",
            InputWidget::Number => "Number input",
            InputWidget::Text => "Text input",
        }
    }
}

/// Current values of the Inputs tab widgets. Presentation state only; the
/// session model never sees these.
#[derive(Debug, Clone)]
pub struct WidgetValues {
    pub checkbox: bool,
    pub toggle: bool,
    pub radio: usize,
    pub select: usize,
    pub multi: [bool; 4],
    pub multi_cursor: usize,
    pub slider: u8,
    pub size_idx: usize,
    pub number: i64,
    pub text: String,
}

impl Default for WidgetValues {
    fn default() -> Self {
        Self {
            checkbox: false,
            toggle: false,
            radio: 0,
            select: 0,
            multi: [false; 4],
            multi_cursor: 0,
            slider: 25,
            size_idx: 2, // "M"
            number: 3,
            text: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormRow {
    Name,
    Age,
    Newsletter,
    Submit,
}

impl FormRow {
    pub const ALL: [FormRow; 4] = [
        FormRow::Name,
        FormRow::Age,
        FormRow::Newsletter,
        FormRow::Submit,
    ];
}

#[derive(Debug, Clone)]
pub struct FormState {
    pub name: String,
    pub age: u8,
    pub newsletter: bool,
    pub last_submission: Option<String>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: 30,
            newsletter: false,
            last_submission: None,
        }
    }
}

impl FormState {
    pub fn summary(&self) -> String {
        format!(
            "Submitted: name=\"{}\", age={}, newsletter={}",
            self.name, self.age, self.newsletter
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusRow {
    Success,
    Info,
    Warning,
    Error,
    Toast,
    Progress,
    Balloons,
    Snow,
}

impl StatusRow {
    pub const ALL: [StatusRow; 8] = [
        StatusRow::Success,
        StatusRow::Info,
        StatusRow::Warning,
        StatusRow::Error,
        StatusRow::Toast,
        StatusRow::Progress,
        StatusRow::Balloons,
        StatusRow::Snow,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StatusRow::Success => "Show success message",
            StatusRow::Info => "Show info message",
            StatusRow::Warning => "Show warning message",
            StatusRow::Error => "Show error message",
            StatusRow::Toast => "Show a toast",
            StatusRow::Progress => "Run fake task",
            StatusRow::Balloons => "Balloons",
            StatusRow::Snow => "Snow",
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ProgressState {
    pub running: bool,
    pub pct: u16,
}

impl ProgressState {
    pub fn start(&mut self) {
        self.running = true;
        self.pct = 0;
    }

    /// Advance by `step` percent. Returns true on the tick that completes.
    pub fn advance(&mut self, step: u16) -> bool {
        if !self.running {
            return false;
        }
        self.pct = (self.pct + step).min(100);
        if self.pct >= 100 {
            self.running = false;
            return true;
        }
        false
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectKind {
    Balloons,
    Snow,
}

#[derive(Debug, Clone)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub tint: u8,
}

/// A short-lived celebration overlay, advanced once per tick.
#[derive(Debug, Clone)]
pub struct Effect {
    pub kind: EffectKind,
    pub particles: Vec<Particle>,
    pub ticks_left: u32,
    pub width: u16,
    pub height: u16,
}

const EFFECT_PARTICLES: usize = 40;
const EFFECT_TICKS: u32 = 80;

impl Effect {
    pub fn spawn(kind: EffectKind, size: (u16, u16)) -> Self {
        let (width, height) = size;
        let mut rng = rand::rng();
        let particles = (0..EFFECT_PARTICLES)
            .map(|_| {
                let x = rng.random_range(0.0..f64::from(width.max(1)));
                let (y, vy) = match kind {
                    // Snow falls from above the top edge
                    EffectKind::Snow => (
                        -rng.random_range(0.0..f64::from(height.max(1))),
                        rng.random_range(0.2..0.6),
                    ),
                    // Balloons rise from below the bottom edge
                    EffectKind::Balloons => (
                        f64::from(height) + rng.random_range(0.0..f64::from(height.max(1))),
                        -rng.random_range(0.3..0.8),
                    ),
                };
                Particle {
                    x,
                    y,
                    vx: rng.random_range(-0.15..0.15),
                    vy,
                    tint: rng.random_range(0..6),
                }
            })
            .collect();
        Self {
            kind,
            particles,
            ticks_left: EFFECT_TICKS,
            width,
            height,
        }
    }

    /// Move particles one step. Returns false once the effect has expired.
    pub fn advance(&mut self) -> bool {
        if self.ticks_left == 0 {
            return false;
        }
        self.ticks_left -= 1;
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;
            if p.x < 0.0 {
                p.x += f64::from(self.width);
            } else if p.x >= f64::from(self.width) {
                p.x -= f64::from(self.width);
            }
        }
        true
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub text: String,
    pub expires_at: u64,
}

#[derive(Debug)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
    pub history: Vec<String>,
    pub history_index: Option<usize>,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            history: Vec::new(),
            history_index: None,
        }
    }

    fn prev_boundary(&self) -> usize {
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.text[self.cursor..]
            .char_indices()
            .nth(1)
            .map(|(i, _)| self.cursor + i)
            .unwrap_or(self.text.len())
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.prev_boundary();
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.next_boundary();
            self.text.drain(self.cursor..next);
        }
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut pos = self.cursor;
        while pos > 0 && self.text.as_bytes().get(pos - 1) == Some(&b' ') {
            pos -= 1;
        }
        while pos > 0 && self.text.as_bytes().get(pos - 1) != Some(&b' ') {
            pos -= 1;
        }
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_boundary();
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.next_boundary();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Clear the line, push it onto history, and return it.
    pub fn take_text(&mut self) -> String {
        let text = std::mem::take(&mut self.text);
        self.cursor = 0;
        self.history_index = None;
        if !text.is_empty() {
            self.history.push(text.clone());
        }
        text
    }

    pub fn history_up(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let idx = match self.history_index {
            Some(i) if i > 0 => i - 1,
            Some(_) => return,
            None => self.history.len() - 1,
        };
        self.history_index = Some(idx);
        self.text = self.history[idx].clone();
        self.cursor = self.text.len();
    }

    pub fn history_down(&mut self) {
        match self.history_index {
            Some(i) if i + 1 < self.history.len() => {
                let idx = i + 1;
                self.history_index = Some(idx);
                self.text = self.history[idx].clone();
                self.cursor = self.text.len();
            }
            Some(_) => {
                self.history_index = None;
                self.text.clear();
                self.cursor = 0;
            }
            None => {}
        }
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub caps: Capabilities,
    pub session_name: String,
    pub started_at: DateTime<Local>,
    pub gallery: GalleryData,
    pub tab: Tab,
    pub focus: FocusPanel,
    pub editing: Option<EditTarget>,
    pub inputs_selected: usize,
    pub widgets: WidgetValues,
    pub form_selected: usize,
    pub form: FormState,
    pub status_selected: usize,
    pub feedback: Vec<Feedback>,
    pub progress: ProgressState,
    pub effect: Option<Effect>,
    pub toast: Option<Toast>,
    pub data_scroll: usize,
    pub chat_scroll: usize,
    pub chat_input: InputState,
    pub size: (u16, u16),
    pub tick_count: u64,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        caps: Capabilities,
        session_name: String,
        gallery: GalleryData,
        size: (u16, u16),
    ) -> Self {
        Self {
            config,
            caps,
            session_name,
            started_at: Local::now(),
            gallery,
            tab: Tab::Inputs,
            focus: FocusPanel::Content,
            editing: None,
            inputs_selected: 0,
            widgets: WidgetValues::default(),
            form_selected: 0,
            form: FormState::default(),
            status_selected: 0,
            feedback: Vec::new(),
            progress: ProgressState::default(),
            effect: None,
            toast: None,
            data_scroll: 0,
            chat_scroll: 0,
            chat_input: InputState::new(),
            size,
            tick_count: 0,
            should_quit: false,
            dirty: true,
        }
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
        self.editing = None;
        self.focus = if tab == Tab::Chat {
            FocusPanel::ChatInput
        } else {
            FocusPanel::Content
        };
        self.dirty = true;
    }

    pub fn push_feedback(&mut self, kind: FeedbackKind, text: String) {
        self.feedback.push(Feedback {
            timestamp: Local::now()
                .format(&self.config.ui.timestamp_format)
                .to_string(),
            kind,
            text,
        });
        let max = self.config.ui.max_feedback;
        if self.feedback.len() > max {
            let excess = self.feedback.len() - max;
            self.feedback.drain(..excess);
        }
        self.dirty = true;
    }

    pub fn show_toast(&mut self, text: impl Into<String>) {
        self.toast = Some(Toast {
            text: text.into(),
            expires_at: self.tick_count + self.config.behavior.toast_ticks,
        });
        self.dirty = true;
    }

    pub fn launch_effect(&mut self, kind: EffectKind) {
        self.effect = Some(Effect::spawn(kind, self.content_size()));
        self.dirty = true;
    }

    /// Approximate size of the content pane, used to seed effect particles.
    fn content_size(&self) -> (u16, u16) {
        let sidebar = if self.sidebar_visible() { 24 } else { 0 };
        (
            self.size.0.saturating_sub(sidebar).max(1),
            self.size.1.saturating_sub(3).max(1),
        )
    }

    pub fn sidebar_visible(&self) -> bool {
        self.size.0 >= 80
    }

    pub fn uptime(&self) -> String {
        let secs = (Local::now() - self.started_at).num_seconds().max(0);
        format!("{}m{:02}s", secs / 60, secs % 60)
    }

    pub fn status_line(&self, counter: u64, turns: usize) -> String {
        format!(
            "{} | counter: {} | turns: {}",
            self.tab.title(),
            counter,
            turns
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> AppState {
        let config = AppConfig::default();
        let gallery = GalleryData::load(&config.data);
        AppState::new(
            config,
            Capabilities::default(),
            "TestWren1".to_string(),
            gallery,
            (100, 30),
        )
    }

    #[test]
    fn test_tab_cycle_wraps() {
        assert_eq!(Tab::Chat.next(), Tab::Inputs);
        assert_eq!(Tab::Inputs.prev(), Tab::Chat);
        let mut tab = Tab::Inputs;
        for _ in 0..Tab::ALL.len() {
            tab = tab.next();
        }
        assert_eq!(tab, Tab::Inputs);
    }

    #[test]
    fn test_select_chat_tab_focuses_input() {
        let mut state = test_state();
        state.select_tab(Tab::Chat);
        assert_eq!(state.focus, FocusPanel::ChatInput);
        state.select_tab(Tab::Data);
        assert_eq!(state.focus, FocusPanel::Content);
    }

    #[test]
    fn test_feedback_is_capped() {
        let mut state = test_state();
        state.config.ui.max_feedback = 3;
        for i in 0..5 {
            state.push_feedback(FeedbackKind::Info, format!("msg {}", i));
        }
        assert_eq!(state.feedback.len(), 3);
        assert_eq!(state.feedback[0].text, "msg 2");
        assert_eq!(state.feedback[2].text, "msg 4");
    }

    #[test]
    fn test_progress_advances_and_completes() {
        let mut progress = ProgressState::default();
        assert!(!progress.advance(10));
        progress.start();
        let mut finished = false;
        for _ in 0..20 {
            if progress.advance(10) {
                finished = true;
                break;
            }
        }
        assert!(finished);
        assert!(!progress.running);
        assert_eq!(progress.pct, 100);
    }

    #[test]
    fn test_effect_expires() {
        let mut effect = Effect::spawn(EffectKind::Snow, (40, 20));
        assert_eq!(effect.particles.len(), EFFECT_PARTICLES);
        let mut steps = 0;
        while effect.advance() {
            steps += 1;
            assert!(steps <= EFFECT_TICKS);
        }
        assert_eq!(steps, EFFECT_TICKS);
    }

    #[test]
    fn test_input_editing() {
        let mut input = InputState::new();
        for c in "hello".chars() {
            input.insert_char(c);
        }
        input.move_left();
        input.delete_back();
        assert_eq!(input.text, "helo");
        input.move_end();
        input.delete_word_back();
        assert_eq!(input.text, "");
    }

    #[test]
    fn test_input_history_recall() {
        let mut input = InputState::new();
        for c in "first".chars() {
            input.insert_char(c);
        }
        assert_eq!(input.take_text(), "first");
        assert_eq!(input.text, "");
        input.history_up();
        assert_eq!(input.text, "first");
        input.history_down();
        assert_eq!(input.text, "");
    }

    #[test]
    fn test_take_text_skips_empty_history() {
        let mut input = InputState::new();
        assert_eq!(input.take_text(), "");
        assert!(input.history.is_empty());
    }
}
