//! The survey form controller: ten answer fields, a submit action gated on
//! full validity, a loading/result modal, and an auto-expiring error toast.

use crossterm::event::{KeyCode, KeyEvent};
use log::{error, info};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap};

use crate::api::{Prediction, PredictionClient};
use crate::survey::fields::{DietaryHabits, Gender, SleepDuration, YesNo};
use crate::survey::{FormState, risk_details};
use crate::tui::background::Background;
use crate::tui::widgets::{NumericInputState, SelectState};
use crate::tui::{App, Command, Resource, Theme};

const TOAST_FAILURE_MESSAGE: &str = "Failed to get prediction from backend !";

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    Gender,
    Age,
    WorkPressure,
    JobSatisfaction,
    WorkHours,
    SleepDuration,
    DietaryHabits,
    FinancialStress,
    FamilyMentalHealth,
    SuicidalThoughts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Field(FieldId),
    Submit,
}

/// Traversal order mirrors the visual order of the form sections.
const FOCUS_ORDER: [Focus; 11] = [
    Focus::Field(FieldId::Gender),
    Focus::Field(FieldId::Age),
    Focus::Field(FieldId::WorkPressure),
    Focus::Field(FieldId::JobSatisfaction),
    Focus::Field(FieldId::WorkHours),
    Focus::Field(FieldId::SleepDuration),
    Focus::Field(FieldId::DietaryHabits),
    Focus::Field(FieldId::FinancialStress),
    Focus::Field(FieldId::FamilyMentalHealth),
    Focus::Field(FieldId::SuicidalThoughts),
    Focus::Submit,
];

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub message: String,
}

#[derive(Debug, Default)]
pub struct State {
    pub form: FormState,
    focus: usize,

    // Widget state per field; the values themselves live in `form`
    gender_select: SelectState,
    sleep_select: SelectState,
    dietary_select: SelectState,
    family_select: SelectState,
    suicidal_select: SelectState,
    age_input: NumericInputState,
    pressure_input: NumericInputState,
    satisfaction_input: NumericInputState,
    hours_input: NumericInputState,
    financial_input: NumericInputState,

    pub prediction: Resource<Prediction>,
    pub show_modal: bool,
    pub toast: Option<Toast>,
    // Incremented per toast so a stale auto-hide timer cannot clear a
    // newer toast
    toast_seq: u64,

    background: Background,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    FocusNext,
    FocusPrev,
    /// Key routed to the focused field widget
    Input(KeyCode),
    Submit,
    PredictionLoaded(Result<Prediction, String>),
    CloseModal,
    ToastExpired(u64),
    Quit,
}

impl State {
    fn focused(&self) -> Focus {
        FOCUS_ORDER[self.focus]
    }

    /// The focused select field whose dropdown is currently open, if any.
    fn open_select(&self) -> Option<FieldId> {
        let Focus::Field(id) = self.focused() else {
            return None;
        };
        let open = match id {
            FieldId::Gender => self.gender_select.is_open(),
            FieldId::SleepDuration => self.sleep_select.is_open(),
            FieldId::DietaryHabits => self.dietary_select.is_open(),
            FieldId::FamilyMentalHealth => self.family_select.is_open(),
            FieldId::SuicidalThoughts => self.suicidal_select.is_open(),
            _ => false,
        };
        open.then_some(id)
    }

    /// Dropdown view data for a select field: (open, highlighted, options,
    /// chosen index). None for numeric fields.
    fn select_view(&self, id: FieldId) -> Option<(bool, usize, Vec<&'static str>, Option<usize>)> {
        fn parts<T: Copy + PartialEq>(
            select: &SelectState,
            value: Option<T>,
            options: &[T],
            as_str: fn(&T) -> &'static str,
        ) -> (bool, usize, Vec<&'static str>, Option<usize>) {
            let chosen = value.and_then(|v| options.iter().position(|o| *o == v));
            (
                select.is_open(),
                select.highlighted(),
                options.iter().map(as_str).collect(),
                chosen,
            )
        }

        match id {
            FieldId::Gender => Some(parts(
                &self.gender_select,
                self.form.gender,
                &Gender::ALL,
                |g| g.as_str(),
            )),
            FieldId::SleepDuration => Some(parts(
                &self.sleep_select,
                self.form.sleep_duration,
                &SleepDuration::ALL,
                |s| s.as_str(),
            )),
            FieldId::DietaryHabits => Some(parts(
                &self.dietary_select,
                self.form.dietary_habits,
                &DietaryHabits::ALL,
                |d| d.as_str(),
            )),
            FieldId::FamilyMentalHealth => Some(parts(
                &self.family_select,
                self.form.family_mental_health,
                &YesNo::ALL,
                |y| y.as_str(),
            )),
            FieldId::SuicidalThoughts => Some(parts(
                &self.suicidal_select,
                self.form.suicidal_thoughts,
                &YesNo::ALL,
                |y| y.as_str(),
            )),
            _ => None,
        }
    }

    fn apply_input(&mut self, key: KeyCode) {
        fn edit_select<T: Copy + PartialEq>(
            select: &mut SelectState,
            value: &mut Option<T>,
            options: &[T],
            key: KeyCode,
        ) {
            let current = value.and_then(|v| options.iter().position(|o| *o == v));
            if let Some(index) = select.handle_key(key, current, options.len()) {
                *value = Some(options[index]);
            }
        }

        let Focus::Field(id) = self.focused() else {
            return;
        };
        match id {
            FieldId::Gender => {
                edit_select(&mut self.gender_select, &mut self.form.gender, &Gender::ALL, key)
            }
            FieldId::SleepDuration => edit_select(
                &mut self.sleep_select,
                &mut self.form.sleep_duration,
                &SleepDuration::ALL,
                key,
            ),
            FieldId::DietaryHabits => edit_select(
                &mut self.dietary_select,
                &mut self.form.dietary_habits,
                &DietaryHabits::ALL,
                key,
            ),
            FieldId::FamilyMentalHealth => edit_select(
                &mut self.family_select,
                &mut self.form.family_mental_health,
                &YesNo::ALL,
                key,
            ),
            FieldId::SuicidalThoughts => edit_select(
                &mut self.suicidal_select,
                &mut self.form.suicidal_thoughts,
                &YesNo::ALL,
                key,
            ),
            FieldId::Age => {
                self.age_input.handle_key(key, &mut self.form.age, 2);
            }
            FieldId::WorkPressure => {
                self.pressure_input
                    .handle_key(key, &mut self.form.work_pressure, 1);
            }
            FieldId::JobSatisfaction => {
                self.satisfaction_input
                    .handle_key(key, &mut self.form.job_satisfaction, 1);
            }
            FieldId::WorkHours => {
                self.hours_input.handle_key(key, &mut self.form.work_hours, 2);
            }
            FieldId::FinancialStress => {
                self.financial_input
                    .handle_key(key, &mut self.form.financial_stress, 1);
            }
        }
    }

    fn numeric_cursor(&self, id: FieldId) -> usize {
        match id {
            FieldId::Age => self.age_input.cursor_pos(),
            FieldId::WorkPressure => self.pressure_input.cursor_pos(),
            FieldId::JobSatisfaction => self.satisfaction_input.cursor_pos(),
            FieldId::WorkHours => self.hours_input.cursor_pos(),
            FieldId::FinancialStress => self.financial_input.cursor_pos(),
            _ => 0,
        }
    }
}

pub struct SurveyApp;

impl App for SurveyApp {
    type State = State;
    type Msg = Msg;

    fn handle_key(state: &State, key: KeyEvent) -> Option<Msg> {
        // The modal blocks all input; it can only be closed once the
        // request has settled.
        if state.show_modal {
            if state.prediction.is_loading() {
                return None;
            }
            return match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Some(Msg::CloseModal),
                _ => None,
            };
        }

        // An open dropdown captures every key
        if state.open_select().is_some() {
            return Some(Msg::Input(key.code));
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => Some(Msg::FocusNext),
            KeyCode::BackTab | KeyCode::Up => Some(Msg::FocusPrev),
            KeyCode::Esc | KeyCode::Char('q') => Some(Msg::Quit),
            KeyCode::Enter if state.focused() == Focus::Submit => Some(Msg::Submit),
            _ => match state.focused() {
                Focus::Field(_) => Some(Msg::Input(key.code)),
                Focus::Submit => None,
            },
        }
    }

    fn update(state: &mut State, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::FocusNext => {
                state.focus = (state.focus + 1) % FOCUS_ORDER.len();
                Command::None
            }

            Msg::FocusPrev => {
                state.focus = (state.focus + FOCUS_ORDER.len() - 1) % FOCUS_ORDER.len();
                Command::None
            }

            Msg::Input(key) => {
                state.apply_input(key);
                Command::None
            }

            Msg::Submit => {
                // Gated on full validity and on no request being in flight
                if !state.form.is_valid() || state.prediction.is_loading() {
                    return Command::None;
                }
                let payload = match state.form.payload() {
                    Ok(payload) => payload,
                    Err(e) => {
                        error!("Failed to build payload: {e:#}");
                        return Command::None;
                    }
                };

                state.show_modal = true;
                state.prediction = Resource::Loading;
                info!("Submitting prediction request");

                Command::perform(
                    async move {
                        let config = crate::global_config();
                        // Artificial pacing delay before the network call
                        tokio::time::sleep(config.submit_delay()).await;
                        let client = PredictionClient::new(
                            config.endpoint.clone(),
                            config.request_timeout(),
                        );
                        client.predict(&payload).await.map_err(|e| format!("{e:#}"))
                    },
                    Msg::PredictionLoaded,
                )
            }

            Msg::PredictionLoaded(result) => match result {
                Ok(prediction) => {
                    info!(
                        "Prediction: {} ({}%)",
                        prediction.risk_level, prediction.percentage
                    );
                    state.prediction = Resource::Success(prediction);
                    Command::None
                }
                Err(e) => {
                    error!("Prediction request failed: {e}");
                    state.show_modal = false;
                    state.prediction = Resource::Failure(e);
                    state.toast_seq += 1;
                    state.toast = Some(Toast {
                        message: TOAST_FAILURE_MESSAGE.to_string(),
                    });
                    let seq = state.toast_seq;
                    Command::perform(
                        async move {
                            tokio::time::sleep(crate::global_config().toast_duration()).await;
                            seq
                        },
                        Msg::ToastExpired,
                    )
                }
            },

            Msg::CloseModal => {
                if !state.prediction.is_loading() {
                    // The result itself is kept; the next submission clears it
                    state.show_modal = false;
                }
                Command::None
            }

            Msg::ToastExpired(seq) => {
                if seq == state.toast_seq {
                    state.toast = None;
                }
                Command::None
            }

            Msg::Quit => Command::Quit,
        }
    }

    fn view(state: &State, frame: &mut Frame, theme: &Theme) {
        let area = frame.area();
        frame.render_widget(
            Block::default().style(Style::default().bg(theme.bg_base)),
            area,
        );
        state.background.render(frame, area, theme);

        let [header, personal, work, lifestyle, health, submit, crisis, _fill, hints] =
            Layout::vertical([
                Constraint::Length(5),
                Constraint::Length(3),
                Constraint::Length(4),
                Constraint::Length(4),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Fill(1),
                Constraint::Length(1),
            ])
            .horizontal_margin(2)
            .areas(area);

        render_header(frame, header, theme);

        let mut field_rects: Vec<(FieldId, Rect)> = Vec::new();
        render_section(
            state,
            frame,
            personal,
            theme,
            " PERSONAL INFORMATION ",
            &[&[FieldId::Gender, FieldId::Age]],
            &mut field_rects,
        );
        render_section(
            state,
            frame,
            work,
            theme,
            " WORK ENVIRONMENT ",
            &[
                &[FieldId::WorkPressure, FieldId::JobSatisfaction],
                &[FieldId::WorkHours],
            ],
            &mut field_rects,
        );
        render_section(
            state,
            frame,
            lifestyle,
            theme,
            " LIFESTYLE FACTORS ",
            &[
                &[FieldId::SleepDuration, FieldId::DietaryHabits],
                &[FieldId::FinancialStress],
            ],
            &mut field_rects,
        );
        render_section(
            state,
            frame,
            health,
            theme,
            " HEALTH & FAMILY ",
            &[&[FieldId::FamilyMentalHealth, FieldId::SuicidalThoughts]],
            &mut field_rects,
        );

        render_submit(state, frame, submit, theme);

        frame.render_widget(
            Paragraph::new("If you're in crisis, please contact a mental health helpline in your area.")
                .style(Style::default().fg(theme.text_tertiary))
                .alignment(Alignment::Center),
            crisis,
        );
        frame.render_widget(
            Paragraph::new(
                "Tab/↑↓ move · Enter/Space open · ←→ cycle · Enter on button submits · q quits",
            )
            .style(Style::default().fg(theme.text_tertiary))
            .alignment(Alignment::Center),
            hints,
        );

        if let Some(id) = state.open_select() {
            render_dropdown(state, frame, id, &field_rects, theme);
        }
        if state.show_modal {
            render_modal(state, frame, area, theme);
        }
        if let Some(toast) = &state.toast {
            render_toast(toast, frame, area, theme);
        }
    }

    fn title() -> &'static str {
        "MindCheck"
    }
}

fn field_label(id: FieldId) -> &'static str {
    match id {
        FieldId::Gender => "Gender",
        FieldId::Age => "Age",
        FieldId::WorkPressure => "Work Pressure (1-5)",
        FieldId::JobSatisfaction => "Job Satisfaction (1-5)",
        FieldId::WorkHours => "Work Hours Per Day",
        FieldId::SleepDuration => "Sleep Duration",
        FieldId::DietaryHabits => "Dietary Habits",
        FieldId::FinancialStress => "Financial Stress (1-5)",
        FieldId::FamilyMentalHealth => "Family Mental Health History ?",
        FieldId::SuicidalThoughts => "Had Suicidal Thoughts ?",
    }
}

fn field_placeholder(id: FieldId) -> &'static str {
    match id {
        FieldId::Gender => "Select gender",
        FieldId::Age => "17-70",
        FieldId::WorkPressure => "1-5",
        FieldId::JobSatisfaction => "1-5",
        FieldId::WorkHours => "e.g., 8",
        FieldId::SleepDuration => "Select hours",
        FieldId::DietaryHabits => "Select habits",
        FieldId::FinancialStress => "1-5",
        FieldId::FamilyMentalHealth => "Select",
        FieldId::SuicidalThoughts => "Select",
    }
}

fn render_header(frame: &mut Frame, area: Rect, theme: &Theme) {
    let lines = vec![
        Line::from(vec![
            Span::styled("♥ ", Style::default().fg(theme.accent_tertiary)),
            Span::styled("MindCheck", Style::default().fg(theme.accent_tertiary).bold()),
        ]),
        Line::styled(
            "WORKPLACE DEPRESSION RISK PREDICTOR",
            Style::default().fg(theme.accent_primary).bold(),
        )
        .alignment(Alignment::Center),
        Line::styled(
            "This tool estimates mental health risk based on workplace and lifestyle factors,",
            Style::default().fg(theme.text_secondary),
        )
        .alignment(Alignment::Center),
        Line::styled(
            "Your responses remain private and confidential.",
            Style::default().fg(theme.text_secondary),
        )
        .alignment(Alignment::Center),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// Render one bordered section. Each inner slice of `rows` is a row of
/// fields laid out in equal columns.
fn render_section(
    state: &State,
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    title: &str,
    rows: &[&[FieldId]],
    field_rects: &mut Vec<(FieldId, Rect)>,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_primary))
        .title(Span::styled(title, Style::default().fg(theme.text_secondary).bold()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let row_constraints: Vec<Constraint> = rows.iter().map(|_| Constraint::Length(1)).collect();
    let row_areas = Layout::vertical(row_constraints).split(inner);

    for (row, fields) in rows.iter().enumerate() {
        let column_constraints: Vec<Constraint> = fields
            .iter()
            .map(|_| Constraint::Ratio(1, fields.len() as u32))
            .collect();
        let columns = Layout::horizontal(column_constraints).split(row_areas[row]);
        for (column, &id) in fields.iter().enumerate() {
            render_field(state, frame, columns[column], id, theme);
            field_rects.push((id, columns[column]));
        }
    }
}

fn render_field(state: &State, frame: &mut Frame, area: Rect, id: FieldId, theme: &Theme) {
    let focused = state.focused() == Focus::Field(id);

    let (text, is_placeholder) = match state.select_view(id) {
        Some((_, _, options, chosen)) => match chosen {
            Some(index) => (format!("{} ▾", options[index]), false),
            None => (format!("{} ▾", field_placeholder(id)), true),
        },
        None => {
            let value = match id {
                FieldId::Age => &state.form.age,
                FieldId::WorkPressure => &state.form.work_pressure,
                FieldId::JobSatisfaction => &state.form.job_satisfaction,
                FieldId::WorkHours => &state.form.work_hours,
                FieldId::FinancialStress => &state.form.financial_stress,
                _ => unreachable!("select fields handled above"),
            };
            if value.is_empty() && !focused {
                (field_placeholder(id).to_string(), true)
            } else if focused {
                // Show the cursor position while editing
                let cursor = state.numeric_cursor(id).min(value.len());
                (format!("{}▏{}", &value[..cursor], &value[cursor..]), false)
            } else {
                (value.clone(), false)
            }
        }
    };

    let label_style = if focused {
        Style::default().fg(theme.accent_primary).bold()
    } else {
        Style::default().fg(theme.text_tertiary)
    };
    let value_style = if is_placeholder {
        Style::default().fg(theme.text_tertiary).italic()
    } else if focused {
        Style::default().fg(theme.accent_primary)
    } else {
        Style::default().fg(theme.text_primary)
    };

    let line = Line::from(vec![
        Span::styled(format!("{} ", field_label(id)), label_style),
        Span::styled("[ ", Style::default().fg(theme.border_secondary)),
        Span::styled(text, value_style),
        Span::styled(" ]", Style::default().fg(theme.border_secondary)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_submit(state: &State, frame: &mut Frame, area: Rect, theme: &Theme) {
    let focused = state.focused() == Focus::Submit;
    let loading = state.prediction.is_loading();
    let enabled = state.form.is_valid() && !loading;

    let label = if loading { "Processing..." } else { "Predict Risk" };
    let mut style = if enabled {
        Style::default().fg(theme.accent_success).bold()
    } else {
        Style::default().fg(theme.border_secondary)
    };
    if focused {
        style = style.reversed();
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if enabled {
            theme.accent_success
        } else {
            theme.border_secondary
        }));
    frame.render_widget(
        Paragraph::new(Span::styled(label, style))
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}

fn render_dropdown(
    state: &State,
    frame: &mut Frame,
    id: FieldId,
    field_rects: &[(FieldId, Rect)],
    theme: &Theme,
) {
    let Some((_, highlighted, options, chosen)) = state.select_view(id) else {
        return;
    };
    let Some(&(_, field_rect)) = field_rects.iter().find(|(fid, _)| *fid == id) else {
        return;
    };

    let area = frame.area();
    let width = (options.iter().map(|o| o.len()).max().unwrap_or(0) as u16 + 6).min(area.width);
    let height = options.len() as u16 + 2;
    let x = (field_rect.x + 2).min(area.right().saturating_sub(width));
    // Open below the field, or above when there is no room
    let y = if field_rect.y + 1 + height <= area.bottom() {
        field_rect.y + 1
    } else {
        field_rect.y.saturating_sub(height)
    };
    let popup = Rect::new(x, y, width, height);

    let lines: Vec<Line> = options
        .iter()
        .enumerate()
        .map(|(index, option)| {
            let marker = if chosen == Some(index) { "✓ " } else { "  " };
            let style = if index == highlighted {
                Style::default().fg(theme.accent_primary).bg(theme.bg_surface).bold()
            } else {
                Style::default().fg(theme.text_primary)
            };
            Line::styled(format!("{}{}", marker, option), style)
        })
        .collect();

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .style(Style::default().bg(theme.bg_elevated))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.accent_primary)),
            ),
        popup,
    );
}

fn render_modal(state: &State, frame: &mut Frame, area: Rect, theme: &Theme) {
    let loading = state.prediction.is_loading();
    let height = if loading { 7 } else { 13 };
    let popup = centered_rect(area, 48, height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent_tertiary))
        .style(Style::default().bg(theme.bg_elevated));
    let inner = block.inner(popup);
    frame.render_widget(Clear, popup);
    frame.render_widget(block, popup);

    if loading {
        let frame_index =
            (state.background.elapsed().as_millis() / 80) as usize % SPINNER_FRAMES.len();
        let lines = vec![
            Line::default(),
            Line::styled(
                format!("{} Analyzing your data...", SPINNER_FRAMES[frame_index]),
                Style::default().fg(theme.accent_info).bold(),
            )
            .alignment(Alignment::Center),
            Line::default(),
            Line::styled(
                "Please wait",
                Style::default().fg(theme.text_tertiary),
            )
            .alignment(Alignment::Center),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
        return;
    }

    let Some(prediction) = state.prediction.to_option() else {
        return;
    };
    let details = risk_details(&prediction.risk_level);
    let (r, g, b) = details.color;
    let color = Color::Rgb(r, g, b);

    let [head, desc, _gap, gauge_area, _gap2, close] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(format!("{} ", details.glyph), Style::default().fg(color)),
            Span::styled(details.label, Style::default().fg(color).bold()),
        ]))
        .alignment(Alignment::Center),
        head,
    );
    frame.render_widget(
        Paragraph::new(details.description)
            .style(Style::default().fg(theme.text_secondary))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        desc,
    );
    frame.render_widget(
        Gauge::default()
            .ratio((prediction.percentage / 100.0).clamp(0.0, 1.0))
            .label(format_percentage(prediction.percentage))
            .gauge_style(Style::default().fg(color).bg(theme.bg_surface)),
        gauge_area,
    );
    frame.render_widget(
        Paragraph::new("[ Close (Esc) ]")
            .style(Style::default().fg(theme.text_tertiary))
            .alignment(Alignment::Center),
        close,
    );
}

fn render_toast(toast: &Toast, frame: &mut Frame, area: Rect, theme: &Theme) {
    let width = (toast.message.len() as u16 + 8).min(area.width.saturating_sub(4));
    let height = 3;
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.bottom().saturating_sub(height + 1);
    let popup = Rect::new(x, y, width, height);

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("⚠ ", Style::default().fg(theme.accent_error).bold()),
            Span::styled(toast.message.as_str(), Style::default().fg(theme.text_primary)),
        ]))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent_error))
                .style(Style::default().bg(theme.bg_elevated)),
        ),
        popup,
    );
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn format_percentage(percentage: f64) -> String {
    if (percentage - percentage.round()).abs() < 1e-9 {
        format!("{:.0}%", percentage)
    } else {
        format!("{:.1}%", percentage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_state() -> State {
        State {
            form: FormState {
                gender: Some(Gender::Female),
                age: "29".to_string(),
                work_pressure: "5".to_string(),
                job_satisfaction: "1".to_string(),
                sleep_duration: Some(SleepDuration::LessThanFive),
                dietary_habits: Some(DietaryHabits::Unhealthy),
                suicidal_thoughts: Some(YesNo::No),
                work_hours: "12".to_string(),
                financial_stress: "4".to_string(),
                family_mental_health: Some(YesNo::No),
            },
            ..State::default()
        }
    }

    fn prediction(level: &str, percentage: f64) -> Prediction {
        Prediction {
            risk_level: level.to_string(),
            percentage,
        }
    }

    #[test]
    fn test_submit_is_noop_while_form_incomplete() {
        let mut state = State::default();
        let command = SurveyApp::update(&mut state, Msg::Submit);
        assert!(command.is_none());
        assert!(!state.show_modal);
        assert_eq!(state.prediction, Resource::NotAsked);

        // One missing field is enough to keep submission gated
        let mut state = filled_state();
        state.form.age.clear();
        let command = SurveyApp::update(&mut state, Msg::Submit);
        assert!(command.is_none());
        assert!(!state.show_modal);
    }

    #[test]
    fn test_submit_opens_modal_and_starts_request() {
        let mut state = filled_state();
        let command = SurveyApp::update(&mut state, Msg::Submit);
        assert!(matches!(command, Command::Perform(_)));
        assert!(state.show_modal);
        assert!(state.prediction.is_loading());
    }

    #[test]
    fn test_second_submit_is_noop_while_in_flight() {
        let mut state = filled_state();
        let first = SurveyApp::update(&mut state, Msg::Submit);
        assert!(matches!(first, Command::Perform(_)));
        let second = SurveyApp::update(&mut state, Msg::Submit);
        assert!(second.is_none());
        assert!(state.prediction.is_loading());
    }

    #[test]
    fn test_success_keeps_modal_open_with_result() {
        let mut state = filled_state();
        SurveyApp::update(&mut state, Msg::Submit);
        let command = SurveyApp::update(
            &mut state,
            Msg::PredictionLoaded(Ok(prediction("Low Risk", 12.0))),
        );
        assert!(command.is_none());
        assert!(state.show_modal);
        assert_eq!(
            state.prediction,
            Resource::Success(prediction("Low Risk", 12.0))
        );
    }

    #[test]
    fn test_close_modal_keeps_result() {
        let mut state = filled_state();
        SurveyApp::update(&mut state, Msg::Submit);
        SurveyApp::update(
            &mut state,
            Msg::PredictionLoaded(Ok(prediction("Low Risk", 12.0))),
        );
        SurveyApp::update(&mut state, Msg::CloseModal);
        assert!(!state.show_modal);
        assert!(state.prediction.is_success());
    }

    #[test]
    fn test_failure_hides_modal_and_shows_toast() {
        let mut state = filled_state();
        SurveyApp::update(&mut state, Msg::Submit);
        let command = SurveyApp::update(
            &mut state,
            Msg::PredictionLoaded(Err("connection refused".to_string())),
        );
        // The auto-hide timer is scheduled as a command
        assert!(matches!(command, Command::Perform(_)));
        assert!(!state.show_modal);
        assert!(!state.prediction.is_loading());
        assert_eq!(
            state.toast,
            Some(Toast {
                message: TOAST_FAILURE_MESSAGE.to_string()
            })
        );
    }

    #[test]
    fn test_toast_expiry_respects_sequence() {
        let mut state = filled_state();
        SurveyApp::update(&mut state, Msg::Submit);
        SurveyApp::update(&mut state, Msg::PredictionLoaded(Err("boom".to_string())));
        let current = state.toast_seq;

        // A stale timer (from an earlier toast) must not clear this one
        SurveyApp::update(&mut state, Msg::ToastExpired(current - 1));
        assert!(state.toast.is_some());

        SurveyApp::update(&mut state, Msg::ToastExpired(current));
        assert!(state.toast.is_none());
    }

    #[test]
    fn test_new_submission_replaces_previous_result() {
        let mut state = filled_state();
        SurveyApp::update(&mut state, Msg::Submit);
        SurveyApp::update(
            &mut state,
            Msg::PredictionLoaded(Ok(prediction("Low Risk", 12.0))),
        );
        SurveyApp::update(&mut state, Msg::CloseModal);

        SurveyApp::update(&mut state, Msg::Submit);
        assert!(state.prediction.is_loading());
        assert!(state.show_modal);

        SurveyApp::update(
            &mut state,
            Msg::PredictionLoaded(Ok(prediction("High Risk", 90.0))),
        );
        assert_eq!(
            state.prediction,
            Resource::Success(prediction("High Risk", 90.0))
        );
    }

    #[test]
    fn test_modal_blocks_input_while_loading() {
        let mut state = filled_state();
        SurveyApp::update(&mut state, Msg::Submit);
        let key = KeyEvent::from(KeyCode::Esc);
        assert_eq!(SurveyApp::handle_key(&state, key), None);

        SurveyApp::update(
            &mut state,
            Msg::PredictionLoaded(Ok(prediction("Low Risk", 12.0))),
        );
        assert_eq!(SurveyApp::handle_key(&state, key), Some(Msg::CloseModal));
    }

    #[test]
    fn test_enter_on_submit_button_submits() {
        let mut state = filled_state();
        state.focus = FOCUS_ORDER.len() - 1;
        assert_eq!(state.focused(), Focus::Submit);
        let key = KeyEvent::from(KeyCode::Enter);
        assert_eq!(SurveyApp::handle_key(&state, key), Some(Msg::Submit));
    }

    #[test]
    fn test_focus_wraps_around() {
        let mut state = State::default();
        SurveyApp::update(&mut state, Msg::FocusPrev);
        assert_eq!(state.focused(), Focus::Submit);
        SurveyApp::update(&mut state, Msg::FocusNext);
        assert_eq!(state.focused(), Focus::Field(FieldId::Gender));
    }

    #[test]
    fn test_input_edits_focused_field() {
        let mut state = State::default();
        // Gender is focused first: cycle picks the first option
        SurveyApp::update(&mut state, Msg::Input(KeyCode::Right));
        assert_eq!(state.form.gender, Some(Gender::Male));

        SurveyApp::update(&mut state, Msg::FocusNext);
        SurveyApp::update(&mut state, Msg::Input(KeyCode::Char('3')));
        SurveyApp::update(&mut state, Msg::Input(KeyCode::Char('4')));
        assert_eq!(state.form.age, "34");
    }

    #[test]
    fn test_open_dropdown_captures_keys() {
        let mut state = State::default();
        SurveyApp::update(&mut state, Msg::Input(KeyCode::Enter));
        assert_eq!(state.open_select(), Some(FieldId::Gender));

        // Tab would normally move focus; with the dropdown open it is
        // routed to the widget instead
        let key = KeyEvent::from(KeyCode::Down);
        assert_eq!(
            SurveyApp::handle_key(&state, key),
            Some(Msg::Input(KeyCode::Down))
        );

        SurveyApp::update(&mut state, Msg::Input(KeyCode::Down));
        SurveyApp::update(&mut state, Msg::Input(KeyCode::Enter));
        assert_eq!(state.form.gender, Some(Gender::Female));
        assert_eq!(state.open_select(), None);
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(12.0), "12%");
        assert_eq!(format_percentage(90.0), "90%");
        assert_eq!(format_percentage(66.7), "66.7%");
    }
}
