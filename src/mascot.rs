//! # Module: Mascot Guide
//!
//! ## Responsibility
//! Professor Bluestein, the guide character. Holds the per-page scripts and a
//! small clock-driven state machine: intro message, speech bubble reveal and
//! the mouth animation.
//!
//! ## Guarantees
//! - Deterministic: time only moves through [`Mascot::advance`]
//! - A section message is spoken once per change of visible section
//! - The mouth always rests closed once an animation finishes
//!
//! ## NOT Responsible For
//! - Drawing (see `tui::widgets::mascot`)
//! - Deciding which section is visible (the caller reports it)

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Delay before the first message of a page, by default.
pub const DEFAULT_INTRO_DELAY: Duration = Duration::from_millis(2000);
/// Delay between `talk` and the bubble showing.
pub const REVEAL_DELAY: Duration = Duration::from_millis(300);
/// Interval between two mouth frames.
pub const MOUTH_INTERVAL: Duration = Duration::from_millis(120);
/// Number of mouth frames per message.
pub const MOUTH_TOGGLES: u8 = 8;

/// Page whose script the mascot follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    /// Landing page with the results dashboard.
    #[default]
    Index,
    /// Video analysis page.
    Analyse,
    /// Slide deck.
    Soutenance,
}

impl Page {
    /// Every page.
    pub const ALL: [Page; 3] = [Page::Index, Page::Analyse, Page::Soutenance];

    /// Lowercase key.
    pub fn key(self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::Analyse => "analyse",
            Self::Soutenance => "soutenance",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|p| p.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown page '{s}'"))
    }
}

/// What triggers a script line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// A page section becoming visible.
    Section(&'static str),
    /// A slide being shown.
    Slide(u32),
}

/// One line of a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptLine {
    /// Trigger.
    pub cue: Cue,
    /// What the mascot says.
    pub message: &'static str,
}

const INDEX_SCRIPT: &[ScriptLine] = &[
    ScriptLine {
        cue: Cue::Section("hero"),
        message: "Bienvenue ! Je suis le Professeur Bluestein. Prêt pour une exploration scientifique ?",
    },
    ScriptLine {
        cue: Cue::Section("contexte"),
        message: "Ici, nous expliquons pourquoi l'INSERM s'intéresse au regard des enfants.",
    },
    ScriptLine {
        cue: Cue::Section("experience"),
        message: "L'eye-tracking suit l'oeil à une vitesse incroyable pour capter chaque détail.",
    },
    ScriptLine {
        cue: Cue::Section("resultats"),
        message: "Comparez les groupes ! Les enfants TSA explorent souvent moins les yeux.",
    },
    ScriptLine {
        cue: Cue::Section("conclusions"),
        message: "Merci d'avoir exploré ces données avec moi. À bientôt !",
    },
];

const ANALYSE_SCRIPT: &[ScriptLine] = &[
    ScriptLine {
        cue: Cue::Section("video-grid"),
        message: "Bonjour ! Le Professeur Bluestein vous accompagne pour l'analyse des vidéos.",
    },
    ScriptLine {
        cue: Cue::Section("insights"),
        message: "Bonne nouvelle ! Nos choix de design sont validés par ces observations.",
    },
    ScriptLine {
        cue: Cue::Section("methodologie"),
        message: "Le protocole de test garantit la pertinence de nos analyses UX.",
    },
];

const SOUTENANCE_SCRIPT: &[ScriptLine] = &[
    ScriptLine {
        cue: Cue::Slide(1),
        message: "Bonjour au jury ! Voici la présentation de notre projet SAE 303.",
    },
    ScriptLine {
        cue: Cue::Slide(3),
        message: "Nous avons choisi une palette douce pour respecter la sensibilité TSA.",
    },
    ScriptLine {
        cue: Cue::Slide(5),
        message: "Nos visages vectoriels permettent une interaction zone par zone.",
    },
    ScriptLine {
        cue: Cue::Slide(7),
        message: "L'analyse vidéo confirme les tendances observées dans les données.",
    },
    ScriptLine {
        cue: Cue::Slide(9),
        message: "C'est l'heure de conclure. Des questions ?",
    },
];

/// The script for `page`, in presentation order.
pub fn script(page: Page) -> &'static [ScriptLine] {
    match page {
        Page::Index => INDEX_SCRIPT,
        Page::Analyse => ANALYSE_SCRIPT,
        Page::Soutenance => SOUTENANCE_SCRIPT,
    }
}

/// Mouth frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mouth {
    /// Resting.
    #[default]
    Closed,
    /// Mid-word.
    Open,
}

/// The guide character.
#[derive(Debug, Clone)]
pub struct Mascot {
    page: Page,
    now: Duration,
    intro_at: Option<Duration>,
    reveal_at: Option<(Duration, &'static str)>,
    next_frame_at: Option<Duration>,
    frames_shown: u8,
    bubble: Option<&'static str>,
    mouth: Mouth,
    last_section: Option<&'static str>,
    cursor: usize,
    spoken: u32,
}

impl Mascot {
    /// A mascot for `page` that speaks its first line after `intro_delay`.
    pub fn new(page: Page, intro_delay: Duration) -> Self {
        Self {
            page,
            now: Duration::ZERO,
            intro_at: Some(intro_delay),
            reveal_at: None,
            next_frame_at: None,
            frames_shown: 0,
            bubble: None,
            mouth: Mouth::Closed,
            last_section: None,
            cursor: 0,
            spoken: 0,
        }
    }

    /// Page being followed.
    pub fn page(&self) -> Page {
        self.page
    }

    /// Elapsed mascot time.
    pub fn elapsed(&self) -> Duration {
        self.now
    }

    /// The visible bubble text.
    pub fn bubble(&self) -> Option<&'static str> {
        self.bubble
    }

    /// Current mouth frame.
    pub fn mouth(&self) -> Mouth {
        self.mouth
    }

    /// Whether a message is pending or the mouth is still moving.
    pub fn is_talking(&self) -> bool {
        self.reveal_at.is_some() || self.next_frame_at.is_some()
    }

    /// Number of messages revealed so far.
    pub fn spoken(&self) -> u32 {
        self.spoken
    }

    /// Index of the script line the section cursor points at.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The script line under the cursor.
    pub fn current_line(&self) -> Option<&'static ScriptLine> {
        script(self.page).get(self.cursor)
    }

    /// Starts speaking `message`: hides the bubble, reveals it after
    /// [`REVEAL_DELAY`], then animates the mouth.
    pub fn talk(&mut self, message: &'static str) {
        self.bubble = None;
        self.mouth = Mouth::Closed;
        self.next_frame_at = None;
        self.frames_shown = 0;
        self.reveal_at = Some((self.now + REVEAL_DELAY, message));
    }

    /// Reports that section `id` is now the visible one. Returns whether the
    /// mascot started speaking.
    pub fn on_section_visible(&mut self, id: &str) -> bool {
        let Some((idx, section, message)) =
            script(self.page)
                .iter()
                .enumerate()
                .find_map(|(idx, line)| match line.cue {
                    Cue::Section(s) if s == id => Some((idx, s, line.message)),
                    _ => None,
                })
        else {
            return false;
        };
        if self.last_section == Some(section) {
            return false;
        }
        self.last_section = Some(section);
        self.cursor = idx;
        self.talk(message);
        true
    }

    /// Reports that slide `n` is shown. Returns whether the mascot started
    /// speaking.
    pub fn on_slide(&mut self, n: u32) -> bool {
        let Some((idx, line)) = script(self.page)
            .iter()
            .enumerate()
            .find(|(_, l)| l.cue == Cue::Slide(n))
        else {
            return false;
        };
        self.cursor = idx;
        self.talk(line.message);
        true
    }

    /// Moves to the next script line and triggers it.
    pub fn next_section(&mut self) -> bool {
        let len = script(self.page).len();
        if self.cursor + 1 >= len {
            return false;
        }
        self.trigger(self.cursor + 1)
    }

    /// Moves to the previous script line and triggers it.
    pub fn prev_section(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.trigger(self.cursor - 1)
    }

    fn trigger(&mut self, idx: usize) -> bool {
        match script(self.page).get(idx).map(|l| l.cue) {
            Some(Cue::Section(id)) => self.on_section_visible(id),
            Some(Cue::Slide(n)) => self.on_slide(n),
            None => false,
        }
    }

    /// Advances the mascot clock by `dt`, firing every deadline that falls
    /// inside the window in order.
    pub fn advance(&mut self, dt: Duration) {
        let target = self.now + dt;
        while let Some(at) = self.next_deadline().filter(|at| *at <= target) {
            self.now = at;
            self.fire(at);
        }
        self.now = target;
    }

    fn next_deadline(&self) -> Option<Duration> {
        [
            self.intro_at,
            self.reveal_at.map(|(at, _)| at),
            self.next_frame_at,
        ]
        .into_iter()
        .flatten()
        .min()
    }

    fn fire(&mut self, at: Duration) {
        if self.intro_at == Some(at) {
            self.intro_at = None;
            if let Some(first) = script(self.page).first() {
                if let Cue::Section(id) = first.cue {
                    self.last_section = Some(id);
                }
                self.cursor = 0;
                self.talk(first.message);
            }
            return;
        }
        if let Some((reveal, message)) = self.reveal_at {
            if reveal == at {
                self.reveal_at = None;
                self.bubble = Some(message);
                self.spoken += 1;
                self.frames_shown = 0;
                self.next_frame_at = Some(at + MOUTH_INTERVAL);
                return;
            }
        }
        if self.next_frame_at == Some(at) {
            self.mouth = if self.frames_shown % 2 == 0 {
                Mouth::Open
            } else {
                Mouth::Closed
            };
            self.frames_shown += 1;
            if self.frames_shown >= MOUTH_TOGGLES {
                self.mouth = Mouth::Closed;
                self.next_frame_at = None;
            } else {
                self.next_frame_at = Some(at + MOUTH_INTERVAL);
            }
        }
    }
}
