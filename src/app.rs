//! Application state and core logic

use crate::events::{AppEvent, EventBus};
use crate::extract::{
    apply_extraction, spawn_extraction, Applied, ExtractError, ExtractionOutcome, Extractor,
};
use crate::platform;
use crate::state::{
    ActiveForm, AppState, FieldEdit, FieldKind, FormKind, InputMethod, OcrFocus, Submission, View,
};
use crate::submit::SubmitSink;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use std::sync::Arc;
use tokio::sync::broadcast::error::TryRecvError;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Startup choices, from config and command line
pub struct AppOptions {
    pub extractor: Option<Arc<dyn Extractor>>,
    pub sink: Arc<dyn SubmitSink>,
    pub start_form: Option<FormKind>,
    pub input_method: InputMethod,
    /// Raw OCR text to extract into a legal text form at startup
    pub initial_ocr_text: Option<String>,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    extractor: Option<Arc<dyn Extractor>>,
    sink: Arc<dyn SubmitSink>,
    pub events: EventBus,
    event_rx: broadcast::Receiver<AppEvent>,
    extraction_tx: mpsc::UnboundedSender<ExtractionOutcome>,
    extraction_rx: mpsc::UnboundedReceiver<ExtractionOutcome>,
    extraction_task: Option<JoinHandle<()>>,
    default_input_method: InputMethod,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance; must run inside a tokio runtime
    pub fn new(options: AppOptions) -> Self {
        let events = EventBus::default();
        let event_rx = events.subscribe();
        let (extraction_tx, extraction_rx) = mpsc::unbounded_channel();

        let mut app = Self {
            state: AppState::default(),
            extractor: options.extractor,
            sink: options.sink,
            events,
            event_rx,
            extraction_tx,
            extraction_rx,
            extraction_task: None,
            default_input_method: options.input_method,
            quit: false,
        };

        if let Some(text) = options.initial_ocr_text {
            app.open_form(FormKind::LegalText);
            if let Some(panel) = app.state.form.ocr_panel_mut() {
                panel.raw_text = text;
            }
            app.start_extraction();
        } else if let Some(kind) = options.start_form {
            app.open_form(kind);
        }

        app
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    pub fn extraction_pending(&self) -> bool {
        self.extraction_task.is_some()
    }

    /// Handle a key press
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        self.state.status_message = None;

        match self.state.current_view {
            View::Home => self.handle_home_key(key),
            View::LegalText | View::Procedure | View::Wizard => self.handle_form_key(key).await,
        }
        Ok(())
    }

    /// Apply results that arrived from background work
    pub fn drain_background(&mut self) {
        while let Ok(outcome) = self.extraction_rx.try_recv() {
            self.finish_extraction(outcome);
        }
        loop {
            match self.event_rx.try_recv() {
                Ok(event) => self.handle_app_event(event),
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::warn!("Event bus lagged, {skipped} events skipped");
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            }
        }
    }

    /// Navigate to a new view
    pub fn navigate(&mut self, view: View) {
        self.state.view_history.push(self.state.current_view);
        self.state.current_view = view;
    }

    /// Go back to the last non-form view
    pub fn go_back(&mut self) {
        while let Some(view) = self.state.view_history.pop() {
            if view.is_form_view() {
                continue;
            }
            self.state.current_view = view;
            return;
        }
        self.state.current_view = View::Home;
    }

    fn open_form(&mut self, kind: FormKind) {
        self.abort_extraction();
        self.state.open_form(kind, self.default_input_method);
        self.navigate(View::for_form(kind));
        tracing::info!("Opened {} form", kind.slug());
    }

    /// Discard the form in progress and return home
    fn cancel_form(&mut self) {
        self.abort_extraction();
        self.state.clear_form();
        self.go_back();
        tracing::info!("Form cancelled");
    }

    /// Drop any extraction in flight; late results become stale
    fn abort_extraction(&mut self) {
        if let Some(task) = self.extraction_task.take() {
            task.abort();
            tracing::debug!("Aborted extraction task");
        }
        if let Some(panel) = self.state.form.ocr_panel_mut() {
            panel.pending = false;
        }
        self.state.bump_generation();
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.state.move_selection_up(),
            KeyCode::Down | KeyCode::Char('j') => self.state.move_selection_down(),
            KeyCode::Enter => {
                let kind = self.state.selected_home_item();
                self.open_form(kind);
            }
            KeyCode::Char(c @ '1'..='3') => {
                self.state.home_index = (c as usize) - ('1' as usize);
                let kind = self.state.selected_home_item();
                self.open_form(kind);
            }
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            _ => {}
        }
    }

    async fn handle_form_key(&mut self, key: KeyEvent) {
        let command = platform::is_command(&key);
        match key.code {
            KeyCode::Esc => return self.cancel_form(),
            KeyCode::Char('s') if command => return self.submit_form().await,
            KeyCode::Char('t') if command => return self.toggle_input_method(),
            KeyCode::Char('o') if command => {
                self.events.publish(AppEvent::ActivateOcrTab);
                return;
            }
            KeyCode::Char('g') if command => return self.request_autofill(),
            _ => {}
        }

        if self.state.form.input_method() == InputMethod::Ocr {
            self.handle_ocr_key(key);
        } else {
            self.handle_field_key(key);
        }
    }

    fn handle_ocr_key(&mut self, key: KeyEvent) {
        let command = platform::is_command(&key);
        let Some(focus) = self.state.form.ocr_panel_mut().map(|p| p.focus) else {
            return;
        };
        match key.code {
            KeyCode::Char('e') if command => self.start_extraction(),
            KeyCode::Char('l') if command => self.load_ocr_file(),
            KeyCode::Enter if focus == OcrFocus::Path => self.load_ocr_file(),
            code => {
                let Some(panel) = self.state.form.ocr_panel_mut() else {
                    return;
                };
                match code {
                    KeyCode::Tab | KeyCode::BackTab => panel.toggle_focus(),
                    KeyCode::Enter => panel.newline(),
                    KeyCode::Backspace => panel.pop_char(),
                    KeyCode::Char(c) if !command => panel.push_char(c),
                    _ => {}
                }
            }
        }
    }

    fn handle_field_key(&mut self, key: KeyEvent) {
        let command = platform::is_command(&key);

        if let ActiveForm::Wizard(wizard) = &mut self.state.form {
            let forward = match key.code {
                KeyCode::PageDown => Some(true),
                KeyCode::Char('n') if command => Some(true),
                KeyCode::PageUp => Some(false),
                KeyCode::Char('p') if command => Some(false),
                _ => None,
            };
            if let Some(forward) = forward {
                let moved = if forward { wizard.next() } else { wizard.prev() };
                if moved {
                    tracing::debug!("Wizard step {}/{}", wizard.current_step, wizard.total_steps());
                }
                return;
            }
        }

        if let ActiveForm::LegalText(form) = &mut self.state.form {
            if form.is_type_selector_active() {
                let forward = match key.code {
                    KeyCode::Right | KeyCode::Enter | KeyCode::Char(' ') => Some(true),
                    KeyCode::Left => Some(false),
                    _ => None,
                };
                if let Some(forward) = forward {
                    form.cycle_type(forward);
                    tracing::debug!("Selected legal text type {:?}", form.type_key());
                    self.abort_extraction();
                    return;
                }
            }
        }

        let Some(form) = self.state.form.as_form_mut() else {
            return;
        };
        let kind = form.active_descriptor().map(|f| f.kind);
        let is = |k: FieldKind| kind == Some(k);

        match key.code {
            KeyCode::Tab => form.next_field(),
            KeyCode::BackTab => form.prev_field(),
            KeyCode::Char('a') if command => form.apply_edit(FieldEdit::AppendEntry),
            KeyCode::Char('x') if command => form.apply_edit(FieldEdit::RemoveEntry),
            KeyCode::Char(_) if command => {}
            KeyCode::Up if is(FieldKind::DynamicList) => form.move_list_cursor(false),
            KeyCode::Down if is(FieldKind::DynamicList) => form.move_list_cursor(true),
            KeyCode::Up => form.prev_field(),
            KeyCode::Down => form.next_field(),
            KeyCode::Left if is(FieldKind::Select) => form.apply_edit(FieldEdit::PrevOption),
            KeyCode::Right if is(FieldKind::Select) => form.apply_edit(FieldEdit::NextOption),
            KeyCode::Enter => match kind {
                Some(FieldKind::Textarea) => form.apply_edit(FieldEdit::Newline),
                Some(FieldKind::Select) => form.apply_edit(FieldEdit::NextOption),
                Some(FieldKind::Toggle) => form.apply_edit(FieldEdit::Toggle),
                Some(FieldKind::DynamicList) => form.apply_edit(FieldEdit::AppendEntry),
                _ => form.next_field(),
            },
            KeyCode::Backspace => form.apply_edit(FieldEdit::Backspace),
            KeyCode::Delete => form.apply_edit(FieldEdit::Clear),
            KeyCode::Char(c) => form.apply_edit(FieldEdit::Char(c)),
            _ => {}
        }
    }

    fn toggle_input_method(&mut self) {
        match self.state.form.input_method_mut() {
            Some(method) => {
                method.toggle();
                self.state.status_message = Some(method.label().to_string());
            }
            None => {
                self.state.status_message =
                    Some("Insertion OCR non disponible dans l'assistant".to_string());
            }
        }
    }

    fn request_autofill(&mut self) {
        if let Some(kind) = self.state.form.kind() {
            self.events.publish(AppEvent::OpenAiAutofill {
                context: kind.context(),
            });
        }
    }

    fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::ActivateOcrTab => match self.state.form.input_method_mut() {
                Some(method) => {
                    *method = InputMethod::Ocr;
                    self.state.status_message = Some(method.label().to_string());
                }
                None => tracing::debug!("OCR tab requested without an OCR capable form"),
            },
            AppEvent::OpenAiAutofill { context } => {
                tracing::info!("Auto-fill requested for {context}");
                self.state.status_message =
                    Some(format!("Demande de remplissage automatique envoyée ({context})"));
            }
        }
    }

    fn load_ocr_file(&mut self) {
        let Some(panel) = self.state.form.ocr_panel_mut() else {
            return;
        };
        match panel.load_source() {
            Ok(path) => {
                tracing::info!("Loaded OCR text from {}", path.display());
                self.state.status_message = Some(format!("Texte chargé depuis {}", path.display()));
            }
            Err(e) => self.push_error(format!("Impossible de lire le fichier : {e}")),
        }
    }

    /// Hand the OCR text to the extractor, or straight to the fallback field
    fn start_extraction(&mut self) {
        let Some(kind) = self.state.form.kind() else {
            return;
        };
        let text = self
            .state
            .form
            .ocr_panel_mut()
            .and_then(|panel| panel.text().map(str::to_string));
        let Some(text) = text else {
            return self.push_error("Aucun texte OCR à extraire");
        };

        self.abort_extraction();
        let generation = self.state.form_generation;

        match self.extractor.clone() {
            Some(extractor) => {
                if let Some(panel) = self.state.form.ocr_panel_mut() {
                    panel.pending = true;
                }
                self.state.status_message = Some("Extraction en cours…".to_string());
                tracing::info!("Starting {} extraction (generation {generation})", kind.slug());
                self.extraction_task = Some(spawn_extraction(
                    extractor,
                    kind,
                    text,
                    generation,
                    self.extraction_tx.clone(),
                ));
            }
            None => self.finish_extraction(ExtractionOutcome {
                generation,
                kind,
                raw_text: text,
                result: Err(ExtractError::Unavailable),
            }),
        }
    }

    fn finish_extraction(&mut self, outcome: ExtractionOutcome) {
        if outcome.generation != self.state.form_generation
            || self.state.form.kind() != Some(outcome.kind)
        {
            tracing::info!(
                "Dropping stale extraction result (generation {}, current {})",
                outcome.generation,
                self.state.form_generation
            );
            return;
        }
        self.extraction_task = None;

        let fallback = outcome.kind.fallback_field();
        let Some(form) = self.state.form.as_form_mut() else {
            return;
        };
        let applied = apply_extraction(form.data_mut(), outcome.result, &outcome.raw_text, fallback);
        form.clamp_focus();

        if let Some(panel) = self.state.form.ocr_panel_mut() {
            panel.pending = false;
        }
        if let Some(method) = self.state.form.input_method_mut() {
            *method = InputMethod::Manual;
        }

        self.state.status_message = Some(match applied {
            Applied::Merged(count) => format!("{count} champ(s) extrait(s)"),
            Applied::Fallback => {
                format!("Extraction indisponible : texte brut placé dans « {fallback} »")
            }
        });
    }

    fn validated_submission(&self) -> Option<Result<Submission, String>> {
        let result = match &self.state.form {
            ActiveForm::None => return None,
            ActiveForm::LegalText(form) => form.submit().map_err(|e| e.to_string()),
            ActiveForm::Procedure(form) => form.submit().map_err(|e| e.to_string()),
            ActiveForm::Wizard(form) => form.submit().map_err(|e| e.to_string()),
        };
        Some(result)
    }

    async fn submit_form(&mut self) {
        let submission = match self.validated_submission() {
            None => return,
            Some(Err(message)) => {
                tracing::warn!("Submission rejected: {message}");
                return self.push_error(message);
            }
            Some(Ok(submission)) => submission,
        };

        match self.sink.submit(&submission).await {
            Ok(receipt) => {
                tracing::info!("Submission {} stored", receipt.id);
                self.abort_extraction();
                self.state.clear_form();
                self.go_back();
                self.state.status_message = Some(format!(
                    "« {} » enregistré ({})",
                    submission.display_name(),
                    receipt.location.display()
                ));
            }
            Err(e) => {
                tracing::error!("Failed to store submission: {e:#}");
                self.push_error(format!("Échec de l'enregistrement : {e:#}"));
            }
        }
    }
}
