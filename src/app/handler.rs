use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind,
};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::Tick => handle_tick(state),
    }
}

fn handle_tick(state: &mut AppState) -> Vec<Action> {
    state.tick_count = state.tick_count.wrapping_add(1);
    let mut animating = false;

    if state.progress.running {
        let step = state.config.behavior.progress_step.max(1);
        if state.progress.advance(step) {
            state.push_feedback(FeedbackKind::Success, "All done!".to_string());
        }
        animating = true;
    }

    if let Some(effect) = state.effect.as_mut() {
        if effect.advance() {
            animating = true;
        } else {
            state.effect = None;
            animating = true;
        }
    }

    if let Some(toast) = &state.toast {
        if state.tick_count >= toast.expires_at {
            state.toast = None;
            animating = true;
        }
    }

    // The sidebar title wave only animates under true color.
    if state.caps.true_color && state.sidebar_visible() {
        animating = true;
    }

    if animating {
        state.dirty = true;
    }
    vec![]
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(w, h) => {
            state.size = (w, h);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    match mouse.kind {
        MouseEventKind::ScrollUp => scroll_up(state, 3),
        MouseEventKind::ScrollDown => scroll_down(state, 3),
        _ => {}
    }
    vec![]
}

fn scroll_up(state: &mut AppState, lines: usize) {
    match state.tab {
        Tab::Chat => state.chat_scroll += lines,
        Tab::Data => state.data_scroll = state.data_scroll.saturating_sub(lines),
        _ => {}
    }
}

fn scroll_down(state: &mut AppState, lines: usize) {
    match state.tab {
        Tab::Chat => state.chat_scroll = state.chat_scroll.saturating_sub(lines),
        Tab::Data => state.data_scroll += lines,
        _ => {}
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s') {
        return vec![Action::SaveConfig];
    }

    // A text field in edit mode captures everything else
    if state.editing.is_some() {
        handle_text_edit(state, key);
        return vec![];
    }

    // The chat input line captures everything else while focused
    if state.focus == FocusPanel::ChatInput {
        return handle_chat_input_key(state, key);
    }

    match key.code {
        KeyCode::Char('q') => return vec![Action::Quit],
        KeyCode::Char('+') | KeyCode::Char('=') => return vec![Action::Increment],
        KeyCode::Tab => {
            state.select_tab(state.tab.next());
            return vec![];
        }
        KeyCode::BackTab => {
            state.select_tab(state.tab.prev());
            return vec![];
        }
        KeyCode::Char(c @ '1'..='5') => {
            let idx = (c as usize) - ('1' as usize);
            state.select_tab(Tab::ALL[idx]);
            return vec![];
        }
        _ => {}
    }

    match state.tab {
        Tab::Inputs => handle_inputs_key(state, key),
        Tab::Form => handle_form_key(state, key),
        Tab::Data => handle_data_key(state, key),
        Tab::Status => handle_status_key(state, key),
        Tab::Chat => handle_chat_key(state, key),
    }
}

fn handle_text_edit(state: &mut AppState, key: KeyEvent) {
    let Some(target) = state.editing else { return };
    let field = match target {
        EditTarget::WidgetText => &mut state.widgets.text,
        EditTarget::FormName => &mut state.form.name,
    };
    match key.code {
        KeyCode::Enter | KeyCode::Esc => state.editing = None,
        KeyCode::Backspace => {
            field.pop();
        }
        KeyCode::Char(c) => field.push(c),
        _ => {}
    }
}

fn handle_inputs_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let rows = InputWidget::ALL.len();
    match key.code {
        KeyCode::Up => {
            state.inputs_selected = state.inputs_selected.saturating_sub(1);
            return vec![];
        }
        KeyCode::Down => {
            state.inputs_selected = (state.inputs_selected + 1).min(rows - 1);
            return vec![];
        }
        _ => {}
    }

    let w = &mut state.widgets;
    match InputWidget::ALL[state.inputs_selected] {
        InputWidget::Checkbox => {
            if activate(&key) {
                w.checkbox = !w.checkbox;
            }
        }
        InputWidget::Toggle => {
            if activate(&key) {
                w.toggle = !w.toggle;
            }
        }
        InputWidget::Radio => cycle_index(&key, &mut w.radio, RADIO_COLORS.len()),
        InputWidget::Select => cycle_index(&key, &mut w.select, FRUITS.len()),
        InputWidget::MultiSelect => match key.code {
            KeyCode::Left => w.multi_cursor = w.multi_cursor.saturating_sub(1),
            KeyCode::Right => w.multi_cursor = (w.multi_cursor + 1).min(TOPPINGS.len() - 1),
            KeyCode::Char(' ') | KeyCode::Enter => {
                w.multi[w.multi_cursor] = !w.multi[w.multi_cursor];
            }
            _ => {}
        },
        InputWidget::Slider => match key.code {
            KeyCode::Left => w.slider = w.slider.saturating_sub(5),
            KeyCode::Right => w.slider = (w.slider + 5).min(100),
            _ => {}
        },
        InputWidget::SizeSlider => cycle_index(&key, &mut w.size_idx, SIZES.len()),
        InputWidget::Number => match key.code {
            KeyCode::Left => w.number = (w.number - 1).max(0),
            KeyCode::Right => w.number += 1,
            _ => {}
        },
        InputWidget::Text => {
            if activate(&key) {
                state.editing = Some(EditTarget::WidgetText);
            }
        }
    }
    vec![]
}

fn activate(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Enter | KeyCode::Char(' '))
}

/// Left/Right step an index; Space cycles forward with wraparound.
fn cycle_index(key: &KeyEvent, idx: &mut usize, len: usize) {
    match key.code {
        KeyCode::Left => *idx = idx.saturating_sub(1),
        KeyCode::Right => *idx = (*idx + 1).min(len - 1),
        KeyCode::Char(' ') | KeyCode::Enter => *idx = (*idx + 1) % len,
        _ => {}
    }
}

fn handle_form_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let rows = FormRow::ALL.len();
    match key.code {
        KeyCode::Up => {
            state.form_selected = state.form_selected.saturating_sub(1);
            return vec![];
        }
        KeyCode::Down => {
            state.form_selected = (state.form_selected + 1).min(rows - 1);
            return vec![];
        }
        _ => {}
    }

    match FormRow::ALL[state.form_selected] {
        FormRow::Name => {
            if activate(&key) {
                state.editing = Some(EditTarget::FormName);
            }
        }
        FormRow::Age => match key.code {
            KeyCode::Left => state.form.age = state.form.age.saturating_sub(1),
            KeyCode::Right => state.form.age = (state.form.age + 1).min(120),
            _ => {}
        },
        FormRow::Newsletter => {
            if activate(&key) {
                state.form.newsletter = !state.form.newsletter;
            }
        }
        FormRow::Submit => {
            if activate(&key) {
                let summary = state.form.summary();
                state.form.last_submission = Some(summary.clone());
                state.push_feedback(FeedbackKind::Success, summary);
                state.show_toast("Form submitted");
                tracing::debug!("form submitted");
            }
        }
    }
    vec![]
}

fn handle_data_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Up => state.data_scroll = state.data_scroll.saturating_sub(1),
        KeyCode::Down => {
            let max = state.gallery.people.rows.len().saturating_sub(1);
            state.data_scroll = (state.data_scroll + 1).min(max);
        }
        KeyCode::Home => state.data_scroll = 0,
        _ => {}
    }
    vec![]
}

fn handle_status_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let rows = StatusRow::ALL.len();
    match key.code {
        KeyCode::Up => {
            state.status_selected = state.status_selected.saturating_sub(1);
            return vec![];
        }
        KeyCode::Down => {
            state.status_selected = (state.status_selected + 1).min(rows - 1);
            return vec![];
        }
        _ => {}
    }

    if !activate(&key) {
        return vec![];
    }

    match StatusRow::ALL[state.status_selected] {
        StatusRow::Success => {
            state.push_feedback(FeedbackKind::Success, "Success message".to_string());
        }
        StatusRow::Info => {
            state.push_feedback(FeedbackKind::Info, "Info message".to_string());
        }
        StatusRow::Warning => {
            state.push_feedback(FeedbackKind::Warning, "Warning message".to_string());
        }
        StatusRow::Error => {
            state.push_feedback(FeedbackKind::Error, "Error message".to_string());
        }
        StatusRow::Toast => state.show_toast("A quick toast notification"),
        StatusRow::Progress => {
            if state.progress.running {
                state.push_feedback(FeedbackKind::Info, "Task already running".to_string());
            } else {
                return vec![Action::StartTask];
            }
        }
        StatusRow::Balloons => {
            return vec![Action::LaunchEffect {
                kind: EffectKind::Balloons,
            }]
        }
        StatusRow::Snow => {
            return vec![Action::LaunchEffect {
                kind: EffectKind::Snow,
            }]
        }
    }
    vec![]
}

fn handle_chat_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Up => state.chat_scroll += 1,
        KeyCode::Down => state.chat_scroll = state.chat_scroll.saturating_sub(1),
        KeyCode::PageUp => state.chat_scroll += 10,
        KeyCode::PageDown => state.chat_scroll = state.chat_scroll.saturating_sub(10),
        KeyCode::End => state.chat_scroll = 0,
        KeyCode::Enter | KeyCode::Char('i') => state.focus = FocusPanel::ChatInput,
        _ => {}
    }
    vec![]
}

fn handle_chat_input_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('w') {
        state.chat_input.delete_word_back();
        return vec![];
    }

    match key.code {
        KeyCode::Esc => state.focus = FocusPanel::Content,
        KeyCode::Enter => {
            let text = state.chat_input.take_text();
            if !text.trim().is_empty() {
                state.chat_scroll = 0;
                return vec![Action::SubmitMessage { text }];
            }
        }
        KeyCode::Char(c) => state.chat_input.insert_char(c),
        KeyCode::Backspace => state.chat_input.delete_back(),
        KeyCode::Delete => state.chat_input.delete_forward(),
        KeyCode::Left => state.chat_input.move_left(),
        KeyCode::Right => state.chat_input.move_right(),
        KeyCode::Home => state.chat_input.move_home(),
        KeyCode::End => state.chat_input.move_end(),
        KeyCode::Up => state.chat_input.history_up(),
        KeyCode::Down => state.chat_input.history_down(),
        _ => {}
    }
    vec![]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::data::GalleryData;
    use crate::host::Capabilities;

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

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn ctrl(c: char) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(
            KeyCode::Char(c),
            KeyModifiers::CONTROL,
        )))
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let mut state = test_state();
        state.select_tab(Tab::Chat);
        let actions = handle_event(&mut state, ctrl('c'));
        assert!(matches!(actions.as_slice(), [Action::Quit]));
    }

    #[test]
    fn test_plus_produces_increment() {
        let mut state = test_state();
        let actions = handle_event(&mut state, key(KeyCode::Char('+')));
        assert!(matches!(actions.as_slice(), [Action::Increment]));
    }

    #[test]
    fn test_tab_key_cycles_tabs() {
        let mut state = test_state();
        assert_eq!(state.tab, Tab::Inputs);
        handle_event(&mut state, key(KeyCode::Tab));
        assert_eq!(state.tab, Tab::Form);
        handle_event(&mut state, key(KeyCode::BackTab));
        assert_eq!(state.tab, Tab::Inputs);
    }

    #[test]
    fn test_number_keys_jump_to_tab() {
        let mut state = test_state();
        handle_event(&mut state, key(KeyCode::Char('5')));
        assert_eq!(state.tab, Tab::Chat);
        assert_eq!(state.focus, FocusPanel::ChatInput);
    }

    #[test]
    fn test_checkbox_toggles_with_space() {
        let mut state = test_state();
        assert!(!state.widgets.checkbox);
        handle_event(&mut state, key(KeyCode::Char(' ')));
        assert!(state.widgets.checkbox);
        handle_event(&mut state, key(KeyCode::Char(' ')));
        assert!(!state.widgets.checkbox);
    }

    #[test]
    fn test_slider_steps_and_clamps() {
        let mut state = test_state();
        state.inputs_selected = InputWidget::ALL
            .iter()
            .position(|w| *w == InputWidget::Slider)
            .unwrap();
        assert_eq!(state.widgets.slider, 25);
        handle_event(&mut state, key(KeyCode::Right));
        assert_eq!(state.widgets.slider, 30);
        for _ in 0..30 {
            handle_event(&mut state, key(KeyCode::Right));
        }
        assert_eq!(state.widgets.slider, 100);
        for _ in 0..30 {
            handle_event(&mut state, key(KeyCode::Left));
        }
        assert_eq!(state.widgets.slider, 0);
    }

    #[test]
    fn test_number_input_floor_is_zero() {
        let mut state = test_state();
        state.inputs_selected = InputWidget::ALL
            .iter()
            .position(|w| *w == InputWidget::Number)
            .unwrap();
        for _ in 0..10 {
            handle_event(&mut state, key(KeyCode::Left));
        }
        assert_eq!(state.widgets.number, 0);
    }

    #[test]
    fn test_form_submit_records_feedback() {
        let mut state = test_state();
        state.select_tab(Tab::Form);
        state.form.age = 31;
        state.form.newsletter = true;
        state.form_selected = FormRow::ALL.len() - 1;
        handle_event(&mut state, key(KeyCode::Enter));
        assert!(state.form.last_submission.is_some());
        let last = state.feedback.last().unwrap();
        assert_eq!(last.kind, FeedbackKind::Success);
        assert!(last.text.contains("age=31"));
        assert!(last.text.contains("newsletter=true"));
        assert!(state.toast.is_some());
    }

    #[test]
    fn test_text_edit_mode_captures_global_keys() {
        let mut state = test_state();
        state.select_tab(Tab::Form);
        handle_event(&mut state, key(KeyCode::Enter)); // start editing name
        assert_eq!(state.editing, Some(EditTarget::FormName));
        for c in "q1+".chars() {
            let actions = handle_event(&mut state, key(KeyCode::Char(c)));
            assert!(actions.is_empty());
        }
        assert_eq!(state.form.name, "q1+");
        assert_eq!(state.tab, Tab::Form);
        handle_event(&mut state, key(KeyCode::Esc));
        assert!(state.editing.is_none());
    }

    #[test]
    fn test_status_rows_emit_actions() {
        let mut state = test_state();
        state.select_tab(Tab::Status);
        state.status_selected = StatusRow::ALL
            .iter()
            .position(|r| *r == StatusRow::Progress)
            .unwrap();
        let actions = handle_event(&mut state, key(KeyCode::Enter));
        assert!(matches!(actions.as_slice(), [Action::StartTask]));

        state.status_selected = StatusRow::ALL
            .iter()
            .position(|r| *r == StatusRow::Snow)
            .unwrap();
        let actions = handle_event(&mut state, key(KeyCode::Enter));
        assert!(matches!(
            actions.as_slice(),
            [Action::LaunchEffect {
                kind: EffectKind::Snow
            }]
        ));
    }

    #[test]
    fn test_chat_submit_produces_action_only_when_nonempty() {
        let mut state = test_state();
        state.select_tab(Tab::Chat);
        let actions = handle_event(&mut state, key(KeyCode::Enter));
        assert!(actions.is_empty());

        for c in "hello".chars() {
            handle_event(&mut state, key(KeyCode::Char(c)));
        }
        let actions = handle_event(&mut state, key(KeyCode::Enter));
        match actions.as_slice() {
            [Action::SubmitMessage { text }] => assert_eq!(text, "hello"),
            other => panic!("unexpected actions: {:?}", other),
        }
    }

    #[test]
    fn test_esc_leaves_chat_input() {
        let mut state = test_state();
        state.select_tab(Tab::Chat);
        handle_event(&mut state, key(KeyCode::Esc));
        assert_eq!(state.focus, FocusPanel::Content);
        handle_event(&mut state, key(KeyCode::Char('i')));
        assert_eq!(state.focus, FocusPanel::ChatInput);
    }

    #[test]
    fn test_tick_drives_progress_to_completion() {
        let mut state = test_state();
        state.progress.start();
        for _ in 0..100 {
            handle_event(&mut state, AppEvent::Tick);
        }
        assert!(!state.progress.running);
        assert_eq!(state.progress.pct, 100);
        assert!(state
            .feedback
            .iter()
            .any(|f| f.kind == FeedbackKind::Success && f.text == "All done!"));
    }

    #[test]
    fn test_toast_expires_on_tick() {
        let mut state = test_state();
        state.config.behavior.toast_ticks = 2;
        state.show_toast("hi");
        handle_event(&mut state, AppEvent::Tick);
        assert!(state.toast.is_some());
        handle_event(&mut state, AppEvent::Tick);
        assert!(state.toast.is_none());
    }

    #[test]
    fn test_effect_is_removed_after_expiry() {
        let mut state = test_state();
        state.launch_effect(EffectKind::Balloons);
        for _ in 0..200 {
            handle_event(&mut state, AppEvent::Tick);
        }
        assert!(state.effect.is_none());
    }

    #[test]
    fn test_resize_updates_size() {
        let mut state = test_state();
        handle_event(&mut state, AppEvent::Terminal(CEvent::Resize(60, 20)));
        assert_eq!(state.size, (60, 20));
        assert!(!state.sidebar_visible());
    }
}
