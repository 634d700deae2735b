//! Host-facing panel adapter.
//!
//! `ChartPanel` owns the chart widget and the small amount of state a panel
//! needs between render cycles: the persisted config, the current selection,
//! the last decoded spec, and the last translation error. Each host frame is
//! handled synchronously by `on_render`.

mod host;
mod settings;

pub use host::{PanelHost, RenderState, StateChannel};
pub use settings::{
    ERROR_FIELD, SettingsAction, SettingsField, SettingsInput, SettingsTree, TOPIC_FIELD,
};

use tracing::{debug, warn};

use crate::api::{
    LatestMessageSelector, PanelConfig, build_figure, normalize_topic, translate,
};
use crate::core::{MessageEvent, ParsedChartSpec, ThemeState, chart_topics};
use crate::error::{PanelError, PanelResult};
use crate::render::ChartWidget;

pub struct ChartPanel<W: ChartWidget> {
    widget: W,
    config: PanelConfig,
    selector: LatestMessageSelector,
    spec: ParsedChartSpec,
    theme: ThemeState,
    topic_names: Vec<String>,
    error: Option<String>,
    needs_redraw: bool,
}

impl<W: ChartWidget> ChartPanel<W> {
    /// Creates a panel from previously persisted state.
    #[must_use]
    pub fn new(widget: W, config: PanelConfig) -> Self {
        Self {
            widget,
            config: config.normalized(),
            selector: LatestMessageSelector::new(),
            spec: ParsedChartSpec::default(),
            theme: ThemeState::default(),
            topic_names: Vec::new(),
            error: None,
            needs_redraw: true,
        }
    }

    /// Registers watched channels, the initial subscription, and settings.
    pub fn initialize<H: PanelHost + ?Sized>(&mut self, host: &mut H) {
        for channel in StateChannel::ALL {
            host.watch(channel);
        }
        host.subscribe(&self.subscription());
        host.update_panel_settings(&self.settings_tree());
    }

    /// Handles one host render cycle and then signals completion through `done`.
    ///
    /// Message and widget failures are recorded and logged; `done` is always
    /// invoked exactly once.
    pub fn on_render<H, F>(&mut self, state: &RenderState, host: &mut H, done: F)
    where
        H: PanelHost + ?Sized,
        F: FnOnce(),
    {
        let mut settings_changed = false;

        if let Some(theme) = state.color_scheme {
            if theme != self.theme {
                self.theme = theme;
                self.needs_redraw = true;
            }
        }

        if let Some(topics) = &state.topics {
            let names: Vec<String> = chart_topics(topics)
                .into_iter()
                .map(|topic| topic.name.clone())
                .collect();
            if names != self.topic_names {
                self.topic_names = names;
                settings_changed = true;
            }
        }

        let incoming: &[MessageEvent] = state.current_frame.as_deref().unwrap_or(&[]);
        if self.selector.apply(self.config.topic(), incoming) {
            settings_changed |= self.refresh_spec();
            self.needs_redraw = true;
        }

        // A failed draw stays pending and is retried on the next frame.
        if self.needs_redraw {
            let figure = build_figure(self.spec.clone(), self.theme);
            match self.widget.render(&figure) {
                Ok(()) => self.needs_redraw = false,
                Err(err) => warn!(error = %err, "chart widget render failed"),
            }
        }

        if settings_changed {
            host.update_panel_settings(&self.settings_tree());
        }

        done();
    }

    /// Applies an edit from the settings panel.
    pub fn handle_settings_action<H: PanelHost + ?Sized>(
        &mut self,
        action: SettingsAction,
        host: &mut H,
    ) -> PanelResult<()> {
        match action {
            SettingsAction::Update { path, value } => match path.as_slice() {
                [field] if field == TOPIC_FIELD => {
                    self.set_topic(value, host);
                    Ok(())
                }
                [field] if field == ERROR_FIELD => Err(PanelError::InvalidData(
                    "error field is read-only".to_owned(),
                )),
                _ => Err(PanelError::InvalidData(format!(
                    "unknown settings path: {}",
                    path.join(".")
                ))),
            },
        }
    }

    /// Switches the subscribed topic, persisting the change.
    ///
    /// Selecting the current topic again is a no-op.
    pub fn set_topic<H: PanelHost + ?Sized>(&mut self, topic: Option<String>, host: &mut H) {
        let topic = normalize_topic(topic);
        if topic == self.config.topic {
            return;
        }
        debug!(from = ?self.config.topic, to = ?topic, "chart topic changed");

        self.config.topic = topic;
        self.selector.reset();
        self.spec = ParsedChartSpec::default();
        self.error = None;
        self.needs_redraw = true;

        host.save_state(&self.config);
        host.subscribe(&self.subscription());
        host.update_panel_settings(&self.settings_tree());
    }

    #[must_use]
    pub fn settings_tree(&self) -> SettingsTree {
        SettingsTree::build(
            &self.topic_names,
            self.config.topic(),
            self.error.as_deref(),
        )
    }

    #[must_use]
    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    #[must_use]
    pub fn theme(&self) -> ThemeState {
        self.theme
    }

    #[must_use]
    pub fn spec(&self) -> &ParsedChartSpec {
        &self.spec
    }

    #[must_use]
    pub fn selected_message(&self) -> Option<&MessageEvent> {
        self.selector.current()
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Chart topics from the latest catalog, in host order.
    #[must_use]
    pub fn topic_names(&self) -> &[String] {
        &self.topic_names
    }

    #[must_use]
    pub fn widget(&self) -> &W {
        &self.widget
    }

    /// Tears the panel down and hands the widget back to the host.
    #[must_use]
    pub fn into_widget(self) -> W {
        self.widget
    }

    fn subscription(&self) -> Vec<String> {
        self.config.topic.iter().cloned().collect()
    }

    // Returns `true` when the error shown in settings changed.
    fn refresh_spec(&mut self) -> bool {
        let (spec, error) = match self.selector.current() {
            None => (ParsedChartSpec::default(), None),
            Some(event) => match translate(&event.message) {
                Ok(spec) => (spec, None),
                Err(err) => {
                    warn!(topic = %event.topic, error = %err, "discarding chart message");
                    (ParsedChartSpec::default(), Some(err.to_string()))
                }
            },
        };
        self.spec = spec;
        let changed = error != self.error;
        self.error = error;
        changed
    }
}
