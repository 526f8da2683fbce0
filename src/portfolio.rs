// Portfolio document model
//
// The document is what every behavior binds to: sections carry ids the nav
// links point at, skill/education cards are the reveal-animated elements,
// certificate entries carry deferred artwork, and the contact section
// carries the mailto link for the copy affordance.
//
// Loaded once at startup from a TOML file (or the bundled demo document) and
// treated as read-only afterwards, except for the lazy artwork load states.

use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Placeholder text shown when artwork cannot be loaded
pub const ARTWORK_PLACEHOLDER: &str = "Imagen no disponible";

/// What role a section plays in the document.
///
/// Hero hosts the typewriter, Skills/Education carry reveal-animated cards,
/// Certificates carries the lightbox thumbnails, Contact carries the email
/// affordance. About is plain markdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Hero,
    About,
    Skills,
    Education,
    Certificates,
    Contact,
}

impl SectionKind {
    /// Whether this section's cards animate in on first visibility
    pub fn cards_animate(&self) -> bool {
        matches!(self, SectionKind::Skills | SectionKind::Education)
    }
}

/// The whole document
#[derive(Debug, Clone, Deserialize)]
pub struct Portfolio {
    /// Owner name shown in the title bar
    pub owner: String,

    /// Hero line revealed by the typewriter
    #[serde(default)]
    pub typing_text: String,

    /// Contact address; when absent the first mailto: link in the
    /// contact section body is used instead
    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub sections: Vec<Section>,
}

/// One navigable page section
#[derive(Debug, Clone, Deserialize)]
pub struct Section {
    /// Anchor id nav links target
    pub id: String,
    pub title: String,
    pub kind: SectionKind,

    /// Markdown body
    #[serde(default)]
    pub body: String,

    /// Reveal-animated items (skills, education)
    #[serde(default)]
    pub cards: Vec<Card>,

    /// Lightbox thumbnails (certificates section)
    #[serde(default)]
    pub certificates: Vec<Certificate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub title: String,
    #[serde(default)]
    pub detail: String,
}

/// A certificate thumbnail with lazily loaded text artwork
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certificate {
    pub title: String,

    /// Alt text used by the lightbox and the error placeholder
    #[serde(default)]
    pub alt: String,

    /// Path to the text-art file; read only when the thumbnail
    /// first scrolls into view
    #[serde(default)]
    pub artwork: Option<PathBuf>,

    /// Runtime load state, not part of the document
    #[serde(skip)]
    pub art: ArtworkState,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ArtworkState {
    /// Not read yet - the data-src marker
    #[default]
    Deferred,
    Loaded(String),
    /// Read failed; placeholder presentation applies
    Failed,
}

impl Certificate {
    /// Read the artwork file if still deferred.
    ///
    /// One-shot: after this call the state is `Loaded` or `Failed` and never
    /// changes again, matching the unobserve-after-load contract.
    pub fn ensure_loaded(&mut self) {
        if self.art != ArtworkState::Deferred {
            return;
        }
        self.art = match &self.artwork {
            Some(path) => match std::fs::read_to_string(path) {
                Ok(text) => ArtworkState::Loaded(text),
                Err(e) => {
                    tracing::warn!("artwork {} not available: {}", path.display(), e);
                    ArtworkState::Failed
                }
            },
            None => ArtworkState::Failed,
        };
    }

    pub fn is_pending(&self) -> bool {
        self.art == ArtworkState::Deferred
    }

    /// Loaded artwork text, if any
    pub fn art_text(&self) -> Option<&str> {
        match &self.art {
            ArtworkState::Loaded(text) => Some(text),
            _ => None,
        }
    }

    /// Alt text, falling back to the title
    pub fn alt_text(&self) -> &str {
        if self.alt.is_empty() {
            &self.title
        } else {
            &self.alt
        }
    }
}

static MAILTO_RE: OnceLock<Regex> = OnceLock::new();

impl Portfolio {
    /// Load a portfolio document from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read portfolio document {}", path.display()))?;
        let portfolio: Portfolio = toml::from_str(&contents)
            .with_context(|| format!("cannot parse portfolio document {}", path.display()))?;
        Ok(portfolio)
    }

    /// The bundled demo document, with artwork already resident
    pub fn demo() -> Self {
        let mut portfolio: Portfolio =
            toml::from_str(DEMO_DOC).expect("bundled demo document is valid");
        for section in &mut portfolio.sections {
            for (cert, art) in section.certificates.iter_mut().zip(DEMO_ART) {
                cert.art = ArtworkState::Loaded((*art).to_string());
            }
        }
        portfolio
    }

    /// Contact email: the explicit field wins, else the first mailto: link
    /// found in a contact section body.
    pub fn contact_email(&self) -> Option<String> {
        if let Some(email) = &self.email {
            return Some(email.clone());
        }
        let re = MAILTO_RE
            .get_or_init(|| Regex::new(r#"mailto:([^)\s"'>]+)"#).expect("mailto regex is valid"));
        self.sections
            .iter()
            .filter(|s| s.kind == SectionKind::Contact)
            .find_map(|s| re.captures(&s.body).map(|c| c[1].to_string()))
    }

    /// Index of the section with the given anchor id
    pub fn section_index(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    /// Eager-load every deferred artwork (the no-lazy-loading fallback)
    pub fn load_all_artwork(&mut self) {
        for section in &mut self.sections {
            for cert in &mut section.certificates {
                cert.ensure_loaded();
            }
        }
    }
}

/// Bundled demo content. Doubles as format documentation for user documents.
const DEMO_DOC: &str = r#"
owner = "Mayra Moyano"
typing_text = "Hola, Soy Mayra Moyano"

[[sections]]
id = "inicio"
title = "Inicio"
kind = "hero"
body = "Desarrolladora frontend y diseñadora. Bienvenida a mi portfolio."

[[sections]]
id = "sobre-mi"
title = "Sobre mí"
kind = "about"
body = """
Me apasiona construir interfaces claras y accesibles.

Trabajo con **diseño centrado en las personas** y me gusta cuidar
cada detalle de la experiencia.
"""

[[sections]]
id = "habilidades"
title = "Habilidades"
kind = "skills"
body = "Tecnologías y herramientas con las que trabajo a diario."

[[sections.cards]]
title = "HTML y CSS"
detail = "Maquetación semántica, layouts responsive"

[[sections.cards]]
title = "JavaScript"
detail = "Interactividad, animaciones, APIs del navegador"

[[sections.cards]]
title = "Diseño UI"
detail = "Prototipado, sistemas de diseño, accesibilidad"

[[sections]]
id = "educacion"
title = "Educación"
kind = "education"

[[sections.cards]]
title = "Técnico en Desarrollo Web"
detail = "Instituto Superior - 2022"

[[sections.cards]]
title = "Curso de Diseño UX/UI"
detail = "Plataforma online - 2023"

[[sections]]
id = "certificados"
title = "Certificados"
kind = "certificates"
body = "Pulsa Enter sobre un certificado para verlo en grande."

[[sections.certificates]]
title = "Desarrollo Web"
alt = "Certificado de Desarrollo Web"

[[sections.certificates]]
title = "Diseño UX/UI"
alt = "Certificado de Diseño UX/UI"

[[sections]]
id = "contacto"
title = "Contacto"
kind = "contact"
body = """
¿Hablamos? Escríbeme a [mayra.moyano@example.com](mailto:mayra.moyano@example.com)
y te responderé lo antes posible.
"""
"#;

/// Text artwork for the demo certificates, paired in order
const DEMO_ART: &[&str] = &[
    r"
 .----------------------------.
 |  CERTIFICADO               |
 |                            |
 |     Desarrollo Web         |
 |                            |
 |     Mayra Moyano           |
 |        ~ 2022 ~            |
 '----------------------------'
",
    r"
 .----------------------------.
 |  CERTIFICADO               |
 |                            |
 |     Diseño UX/UI           |
 |                            |
 |     Mayra Moyano           |
 |        ~ 2023 ~            |
 '----------------------------'
",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_document_parses() {
        let portfolio = Portfolio::demo();
        assert_eq!(portfolio.owner, "Mayra Moyano");
        assert_eq!(portfolio.typing_text, "Hola, Soy Mayra Moyano");
        assert_eq!(portfolio.sections.len(), 6);
        // Demo artwork ships resident, nothing deferred
        let certs = &portfolio.sections[4].certificates;
        assert_eq!(certs.len(), 2);
        assert!(certs.iter().all(|c| c.art_text().is_some()));
    }

    #[test]
    fn contact_email_extracted_from_mailto_link() {
        let portfolio = Portfolio::demo();
        assert_eq!(
            portfolio.contact_email().as_deref(),
            Some("mayra.moyano@example.com")
        );
    }

    #[test]
    fn explicit_email_wins_over_mailto_link() {
        let mut portfolio = Portfolio::demo();
        portfolio.email = Some("x@y.com".to_string());
        assert_eq!(portfolio.contact_email().as_deref(), Some("x@y.com"));
    }

    #[test]
    fn section_index_by_anchor_id() {
        let portfolio = Portfolio::demo();
        assert_eq!(portfolio.section_index("habilidades"), Some(2));
        assert_eq!(portfolio.section_index("no-such-id"), None);
    }

    #[test]
    fn missing_artwork_file_fails_once_and_stays_failed() {
        let mut cert = Certificate {
            title: "Test".to_string(),
            alt: String::new(),
            artwork: Some(PathBuf::from("/definitely/not/here.txt")),
            art: ArtworkState::Deferred,
        };
        cert.ensure_loaded();
        assert_eq!(cert.art, ArtworkState::Failed);
        // A later call must not flip the state back
        cert.ensure_loaded();
        assert_eq!(cert.art, ArtworkState::Failed);
        assert_eq!(cert.alt_text(), "Test");
    }

    #[test]
    fn artwork_file_loads_from_disk() {
        let path = std::env::temp_dir().join("folio-artwork-test.txt");
        std::fs::write(&path, "~~art~~").unwrap();

        let mut cert = Certificate {
            title: "Test".to_string(),
            alt: "Alt text".to_string(),
            artwork: Some(path.clone()),
            art: ArtworkState::Deferred,
        };
        cert.ensure_loaded();
        assert_eq!(cert.art_text(), Some("~~art~~"));
        assert!(!cert.is_pending());
        assert_eq!(cert.alt_text(), "Alt text");

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn certificate_without_artwork_path_uses_placeholder() {
        let mut cert = Certificate {
            title: "Sin imagen".to_string(),
            alt: String::new(),
            artwork: None,
            art: ArtworkState::Deferred,
        };
        cert.ensure_loaded();
        assert_eq!(cert.art, ArtworkState::Failed);
    }

    #[test]
    fn only_skills_and_education_cards_animate() {
        assert!(SectionKind::Skills.cards_animate());
        assert!(SectionKind::Education.cards_animate());
        assert!(!SectionKind::Hero.cards_animate());
        assert!(!SectionKind::Certificates.cards_animate());
    }
}
