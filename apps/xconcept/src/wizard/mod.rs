//! # Terminal Wizard
//!
//! Renders the ten assessment steps on a line-oriented terminal.
//!
//! Every step follows the same shape: print the header, prompt for the
//! step's fields, merge the answers into the session, then ask where to go.
//! Pressing Enter on a prompt keeps the current value, so walking back never
//! loses an answer; `-` empties the field. `v` goes back one step wherever
//! the back action exists.
//!
//! The continue action of a step whose requirements are unmet is shown as
//! unavailable; choosing it simply leaves the student on the same step.

pub mod prompt;

use prompt::{CLEAR_COMMAND, Halt, Prompter, parse_choice};
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};
use xconcept_core::{
    AEROBIC_OPTIONS, Channel, DateStyle, Dispatcher, FOCUS_OPTIONS, Frequency, InjuryAnswer,
    PhotoRef, Progress, RecordPatch, Session, Step, UriOpener, XconceptError,
};

/// Input that triggers the back action.
pub const BACK_COMMAND: &str = "v";

/// Hint shown under the injury question when the answer is "yes".
pub const INJURY_HINT: &str = "Por favor, detalhe sua lesão para adaptarmos o treino.";

/// Message printed by the exit action of the finish step.
pub const EXIT_MESSAGE: &str = "Redirecionando para o plano de treino...";

/// How a wizard run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The student reached the finish step and chose the exit action.
    Finished,
    /// Input closed before the exit action.
    Aborted,
}

/// Where to go after a step's screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Back,
    Exit,
}

// =============================================================================
// WIZARD
// =============================================================================

/// The interactive front end.
pub struct Wizard<R, W> {
    prompt: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Wizard<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            prompt: Prompter::new(input, output),
        }
    }

    /// Give back the underlying reader and writer.
    pub fn into_inner(self) -> (R, W) {
        self.prompt.into_inner()
    }

    /// Drive `session` until the exit action or the end of input.
    pub fn run<O: UriOpener>(
        &mut self,
        session: &mut Session,
        dispatcher: &mut Dispatcher<O>,
    ) -> Result<Outcome, XconceptError> {
        loop {
            let step = session.current_step();
            debug!(
                step = step.number(),
                direction = ?session.direction(),
                "Rendering step"
            );

            match self.show(step, session, dispatcher) {
                Ok(Flow::Continue) => {
                    if !session.advance() {
                        debug!(step = step.number(), "Continue unavailable, staying");
                    }
                }
                Ok(Flow::Back) => {
                    session.retreat();
                }
                Ok(Flow::Exit) => return Ok(Outcome::Finished),
                Err(Halt::EndOfInput) => {
                    info!(step = step.number(), "Input closed, ending session");
                    return Ok(Outcome::Aborted);
                }
                Err(Halt::Failed(e)) => return Err(e),
            }
        }
    }

    /// Map a step to its screen.
    fn show<O: UriOpener>(
        &mut self,
        step: Step,
        session: &mut Session,
        dispatcher: &mut Dispatcher<O>,
    ) -> Result<Flow, Halt> {
        self.header(step)?;
        match step {
            Step::Welcome => self.welcome(session),
            Step::BasicInfo => self.basic_info(session),
            Step::Photos => self.photos(session),
            Step::Measurements => self.measurements(session),
            Step::Frequency => self.frequency(session),
            Step::Aerobics => self.aerobics(session),
            Step::Focus => self.focus(session),
            Step::Injuries => self.injuries(session),
            Step::Goal => self.goal(session, dispatcher.dates()),
            Step::Finish => self.finish(session, dispatcher),
        }
    }

    // -------------------------------------------------------------------------
    // Shared chrome
    // -------------------------------------------------------------------------

    fn header(&mut self, step: Step) -> Result<(), Halt> {
        self.prompt.say("")?;
        if let Some(progress) = step.progress() {
            self.prompt.say(&progress_bar(progress))?;
        }
        self.prompt.say(&format!("== {} ==", step.title()))?;
        for line in step.subtitle().lines() {
            self.prompt.say(line)?;
        }
        self.prompt.say("")
    }

    /// Show the available actions and read the choice.
    fn navigation(&mut self, session: &Session) -> Result<Flow, Halt> {
        let step = session.current_step();
        let mut actions = if session.can_advance() {
            format!("[Enter] {}", step.continue_label())
        } else {
            format!("[Enter] {} (indisponível)", step.continue_label())
        };
        if step.shows_navigation() {
            actions.push_str(&format!("   [{}] Voltar", BACK_COMMAND));
        }
        self.prompt.say(&actions)?;

        let answer = self.prompt.line("> ")?;
        if step.shows_navigation() && answer.trim().eq_ignore_ascii_case(BACK_COMMAND) {
            Ok(Flow::Back)
        } else {
            Ok(Flow::Continue)
        }
    }

    // -------------------------------------------------------------------------
    // Steps
    // -------------------------------------------------------------------------

    fn welcome(&mut self, session: &Session) -> Result<Flow, Halt> {
        self.prompt.say(&format!(
            "Enter mantém o valor atual de cada campo; '{}' apaga; '{}' volta ao passo anterior.",
            CLEAR_COMMAND, BACK_COMMAND
        ))?;
        self.navigation(session)
    }

    fn basic_info(&mut self, session: &mut Session) -> Result<Flow, Halt> {
        let r = session.record();
        let patch = RecordPatch {
            name: self.prompt.text("Nome completo", &r.name)?,
            age: self.prompt.text("Idade", &r.age)?,
            height: self.prompt.text("Altura (cm)", &r.height)?,
            weight: self.prompt.text("Peso (kg)", &r.weight)?,
            basic_notes: self
                .prompt
                .text("Observações gerais (Opcional)", &r.basic_notes)?,
            ..RecordPatch::default()
        };
        session.merge(patch);
        self.navigation(session)
    }

    fn photos(&mut self, session: &mut Session) -> Result<Flow, Halt> {
        let r = session.record();
        let mut ask = |label: &str, current: Option<&PhotoRef>| {
            let current = current.map(|p| p.display_name.as_str()).unwrap_or("");
            self.prompt
                .text(&format!("Foto {} (caminho do arquivo)", label), current)
                .map(|answer| {
                    answer.map(|path| (!path.is_empty()).then(|| PhotoRef::from_path(path)))
                })
        };
        let photo_front = ask("Frontal", r.photo_front.as_ref())?;
        let photo_side = ask("Lateral", r.photo_side.as_ref())?;
        let photo_back = ask("Costas", r.photo_back.as_ref())?;

        let patch = RecordPatch {
            photo_front,
            photo_side,
            photo_back,
            photo_notes: self
                .prompt
                .text("Observações sobre as fotos (Opcional)", &r.photo_notes)?,
            ..RecordPatch::default()
        };
        session.merge(patch);
        self.navigation(session)
    }

    fn measurements(&mut self, session: &mut Session) -> Result<Flow, Halt> {
        let r = session.record();
        let patch = RecordPatch {
            waist: self.prompt.text("Cintura (cm)", &r.waist)?,
            hip: self.prompt.text("Quadril (cm)", &r.hip)?,
            chest: self.prompt.text("Peito (cm)", &r.chest)?,
            arm: self.prompt.text("Braço (cm)", &r.arm)?,
            thigh: self.prompt.text("Coxa (cm)", &r.thigh)?,
            measurement_notes: self
                .prompt
                .text("Observações sobre medidas", &r.measurement_notes)?,
            ..RecordPatch::default()
        };
        session.merge(patch);
        self.navigation(session)
    }

    fn frequency(&mut self, session: &mut Session) -> Result<Flow, Halt> {
        let current = session.record().frequency;
        for (i, choice) in Frequency::CHOICES.iter().enumerate() {
            self.prompt.say(&format!(
                "{} {}. {}",
                mark(current == *choice),
                i + 1,
                choice.label()
            ))?;
        }

        let picked = self
            .prompt
            .choice("Escolha [1-2]: ", Frequency::CHOICES.len())?
            .and_then(|i| Frequency::CHOICES.get(i).copied());
        session.merge(RecordPatch {
            frequency: picked,
            ..RecordPatch::default()
        });
        self.navigation(session)
    }

    fn aerobics(&mut self, session: &mut Session) -> Result<Flow, Halt> {
        loop {
            for (i, option) in AEROBIC_OPTIONS.iter().enumerate() {
                let checked = if session.record().aerobics.contains(option) {
                    "[x]"
                } else {
                    "[ ]"
                };
                self.prompt.say(&format!("{} {}. {}", checked, i + 1, option))?;
            }

            let answer = self
                .prompt
                .line("Número para marcar/desmarcar (Enter para seguir): ")?;
            if answer.trim().is_empty() {
                break;
            }
            if let Some(option) =
                parse_choice(&answer, AEROBIC_OPTIONS.len()).and_then(|i| AEROBIC_OPTIONS.get(i))
            {
                session.toggle_aerobic(option);
            }
        }

        let notes = self
            .prompt
            .text("Preferência ou observações", &session.record().aerobics_notes)?;
        session.merge(RecordPatch {
            aerobics_notes: notes,
            ..RecordPatch::default()
        });
        self.navigation(session)
    }

    fn focus(&mut self, session: &mut Session) -> Result<Flow, Halt> {
        let current = session.record().focus_body_part.clone();
        for (i, option) in FOCUS_OPTIONS.iter().enumerate() {
            self.prompt.say(&format!(
                "{} {}. {}",
                mark(current == option.id),
                i + 1,
                option.label
            ))?;
        }

        let picked = self
            .prompt
            .choice(
                &format!("Escolha [1-{}]: ", FOCUS_OPTIONS.len()),
                FOCUS_OPTIONS.len(),
            )?
            .and_then(|i| FOCUS_OPTIONS.get(i))
            .map(|option| option.id.to_string());
        let notes = self.prompt.text(
            "Observações extras (Obrigatório)",
            &session.record().focus_notes,
        )?;

        session.merge(RecordPatch {
            focus_body_part: picked,
            focus_notes: notes,
            ..RecordPatch::default()
        });
        self.navigation(session)
    }

    fn injuries(&mut self, session: &mut Session) -> Result<Flow, Halt> {
        let current = session.record().has_injuries;
        self.prompt.say(&format!(
            "{} 1. Não possuo lesões",
            mark(current == InjuryAnswer::No)
        ))?;
        self.prompt.say(&format!(
            "{} 2. Sim, possuo lesão ou restrição",
            mark(current == InjuryAnswer::Yes)
        ))?;

        let answer = self
            .prompt
            .choice("Escolha [1-2]: ", 2)?
            .map(|i| InjuryAnswer::from(i == 1));
        session.merge(RecordPatch {
            has_injuries: answer,
            ..RecordPatch::default()
        });

        // "No" hides the details but keeps whatever was typed before.
        if session.record().has_injuries.is_yes() {
            self.prompt.say(INJURY_HINT)?;
            let r = session.record();
            let patch = RecordPatch {
                injury_location: self.prompt.text("Local da lesão", &r.injury_location)?,
                injury_restriction: self
                    .prompt
                    .text("Tipo de restrição", &r.injury_restriction)?,
                injury_avoid: self.prompt.text("Exercícios que evita", &r.injury_avoid)?,
                injury_notes: self.prompt.text("Observações extras", &r.injury_notes)?,
                ..RecordPatch::default()
            };
            session.merge(patch);
        }
        self.navigation(session)
    }

    fn goal(&mut self, session: &Session, dates: &DateStyle) -> Result<Flow, Halt> {
        let schedule = session.record().schedule();
        self.prompt
            .say(&format!("Meta: {} dias", schedule.goal_days()))?;
        self.prompt
            .say(&format!("Início: {}", dates.render(schedule.start_date())))?;
        self.prompt.say(&format!(
            "Reavaliação: {}",
            dates.render(schedule.review_date())
        ))?;
        self.prompt.say("")?;
        self.navigation(session)
    }

    fn finish<O: UriOpener>(
        &mut self,
        session: &Session,
        dispatcher: &mut Dispatcher<O>,
    ) -> Result<Flow, Halt> {
        const CHANNELS: [Channel; 2] = [Channel::Messaging, Channel::Mail];

        loop {
            for (i, channel) in CHANNELS.iter().enumerate() {
                self.prompt.say(&format!("{}. {}", i + 1, channel.label()))?;
            }
            self.prompt
                .say(&format!("{}. Ir para meu Plano de Treino", CHANNELS.len() + 1))?;

            if let Some(closing) = Step::Finish.closing() {
                for line in closing.lines() {
                    self.prompt.say(line)?;
                }
            }

            let picked = self.prompt.choice("> ", CHANNELS.len() + 1)?;
            match picked.map(|i| CHANNELS.get(i).copied()) {
                Some(Some(channel)) => self.deliver(channel, session, dispatcher)?,
                Some(None) => {
                    self.prompt.say(EXIT_MESSAGE)?;
                    return Ok(Flow::Exit);
                }
                None => {}
            }
        }
    }

    /// Fire-and-forget: an opener failure is logged and the menu stays up.
    fn deliver<O: UriOpener>(
        &mut self,
        channel: Channel,
        session: &Session,
        dispatcher: &mut Dispatcher<O>,
    ) -> Result<(), Halt> {
        match dispatcher.send(channel, session.record()) {
            Ok(uri) => {
                info!(%channel, bytes = uri.len(), "Delivery link opened");
                self.prompt.say(&format!("Abrindo {}...", channel.label()))
            }
            Err(e) => {
                warn!(%channel, error = %e, "Could not open delivery link");
                self.prompt
                    .say("Não foi possível abrir o aplicativo. Tente o outro canal.")
            }
        }
    }
}

// =============================================================================
// RENDERING HELPERS
// =============================================================================

fn mark(selected: bool) -> &'static str {
    if selected { "(x)" } else { "( )" }
}

/// Text progress bar, e.g. `[###-----] 3/8 (37%)`.
pub fn progress_bar(progress: Progress) -> String {
    let done = usize::from(progress.current);
    let left = usize::from(progress.total.saturating_sub(progress.current));
    format!(
        "[{}{}] {}/{} ({}%)",
        "#".repeat(done),
        "-".repeat(left),
        progress.current,
        progress.total,
        progress.percent()
    )
}
