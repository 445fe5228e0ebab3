//! # Heredity GUI Application
//!
//! Graphical front end for the thalassemia and hemophilia risk calculators.
//! Built with Iced; all state lives in a [`risk_core::Session`] and the
//! calculation service is reached through [`risk_core::CalculationClient`].
//!
//! Usage: `risk_gui [config.json]`

mod ui;

use std::path::PathBuf;

use iced::widget::{column, container, image, row, rule, stack, Space};
use iced::{Element, Length, Task, Theme};
use tracing_subscriber::EnvFilter;

use risk_core::errors::RiskError;
use risk_core::options::{FatherStatus, MotherCarrier, MotherHistory, Population, Relation};
use risk_core::selection::AncestorNode;
use risk_core::session::SubmissionTicket;
use risk_core::{CalculationClient, Calculator, CalculatorResponse, ClientConfig, ParentSide, Session, SubmitOutcome};

pub fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    iced::application(App::new, App::update, App::view)
        .title("Heredity - Genetic Risk Calculator")
        .theme(App::theme)
        .window_size((1100.0, 760.0))
        .run()
}

/// Every interaction the window can produce
#[derive(Debug, Clone)]
pub enum Message {
    // Selection surface
    SwitchTab(Calculator),
    ToggleDisease(ParentSide, bool),
    ToggleNode(ParentSide, AncestorNode),

    // Thalassemia form
    ThalMotherPopulationSelected(Population),
    ThalFatherPopulationSelected(Population),
    RelationSelected(Relation),

    // Hemophilia form
    MotherCarrierSelected(MotherCarrier),
    MotherHistorySelected(MotherHistory),
    HemoMotherPopulationSelected(Population),
    FatherStatusSelected(FatherStatus),

    // Submission
    Submit(Calculator),
    SubmissionSettled(SubmissionTicket, Result<CalculatorResponse, RiskError>),
    DismissNotice,

    ToggleDarkMode,
}

pub struct App {
    pub session: Session,
    client: Result<CalculationClient, RiskError>,
    pub service_url: String,
    pub status: String,
    pub dark_mode: bool,
    /// Decoded once per applied plot so the view does not rebuild it every frame
    pub plot_handle: Option<image::Handle>,
}

impl App {
    fn new() -> Self {
        let config_path = std::env::args().nth(1).map(PathBuf::from);
        let config = ClientConfig::load(config_path.as_deref()).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "using default configuration");
            ClientConfig::default()
        });
        tracing::info!(url = %config.base_url, timeout_secs = config.timeout_secs, "calculation service");

        App {
            session: Session::new(config.busy_label.clone()),
            service_url: config.base_url.clone(),
            client: CalculationClient::new(config),
            status: "Ready".to_string(),
            dark_mode: false,
            plot_handle: None,
        }
    }

    fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SwitchTab(tab) => {
                self.session.switch_tab(tab);
                self.plot_handle = None;
                self.status = format!("{} calculator", tab);
            }
            Message::ToggleDisease(side, affected) => {
                self.session.toggle_disease(side, affected);
            }
            Message::ToggleNode(side, node) => {
                self.session.toggle_node(side, node);
            }

            Message::ThalMotherPopulationSelected(pop) => {
                self.session.thalassemia_form.mother_population = pop.id().to_string();
            }
            Message::ThalFatherPopulationSelected(pop) => {
                self.session.thalassemia_form.father_population = pop.id().to_string();
            }
            Message::RelationSelected(relation) => {
                self.session.thalassemia_form.relation = relation.id().to_string();
            }

            Message::MotherCarrierSelected(carrier) => {
                self.session.hemophilia_form.mother_carrier = carrier.id().to_string();
            }
            Message::MotherHistorySelected(history) => {
                self.session.hemophilia_form.mother_history = history.id().to_string();
            }
            Message::HemoMotherPopulationSelected(pop) => {
                self.session.hemophilia_form.mother_population = pop.id().to_string();
            }
            Message::FatherStatusSelected(status) => {
                self.session.hemophilia_form.father_affected = status.id().to_string();
            }

            Message::Submit(calculator) => {
                let submission = self.session.begin_submit(calculator);
                let ticket = submission.ticket;
                self.status = format!("Submitting {} request...", calculator);

                return match &self.client {
                    Ok(client) => {
                        let client = client.clone();
                        Task::perform(
                            async move { client.submit(&submission.request).await },
                            move |result| Message::SubmissionSettled(ticket, result),
                        )
                    }
                    Err(e) => Task::done(Message::SubmissionSettled(ticket, Err(e.clone()))),
                };
            }
            Message::SubmissionSettled(ticket, result) => match self.session.complete_submit(ticket, result) {
                SubmitOutcome::Applied => {
                    self.plot_handle = self
                        .session
                        .results()
                        .plot()
                        .map(|(plot, _)| image::Handle::from_bytes(plot.bytes().to_vec()));
                    self.status = format!("{} result updated", ticket.calculator);
                }
                SubmitOutcome::Stale => {}
                SubmitOutcome::Failed { notice } => {
                    self.status = notice;
                }
            },
            Message::DismissNotice => {
                self.session.dismiss_notice();
            }

            Message::ToggleDarkMode => {
                self.dark_mode = !self.dark_mode;
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let mut body = row![ui::input_panel::view_input_panel(self)].spacing(10);
        if self.session.results().is_visible() {
            body = body.push(ui::results_panel::view_results_panel(self));
        }

        let content = column![
            ui::tabs::view_header(self.dark_mode),
            ui::tabs::view_tabs(self.session.selection()),
            rule::horizontal(1),
            Space::new().height(6),
            container(body).height(Length::Fill),
            rule::horizontal(1),
            ui::status_bar::view_status_bar(&self.service_url, &self.status),
        ]
        .padding(10);

        match self.session.notice() {
            Some(notice) => stack![content, ui::modal::view_backdrop(), ui::modal::view_notice(notice)].into(),
            None => content.into(),
        }
    }
}
