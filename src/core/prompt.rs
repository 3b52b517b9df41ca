//! PMO report prompt: the fixed lifecycle template plus one bullet per row.

use crate::models::feedback::FeedbackTable;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// The 8-phase project lifecycle the report maps feedback onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecyclePhase {
    Genesis,
    Analysis,
    Prototyping,
    Approval,
    Development,
    Testing,
    Deployment,
    Support,
}

/// Language the report template is written in. The model answers in the
/// same language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PromptLanguage {
    #[default]
    Es,
    En,
}

impl LifecyclePhase {
    pub const ALL: [LifecyclePhase; 8] = [
        LifecyclePhase::Genesis,
        LifecyclePhase::Analysis,
        LifecyclePhase::Prototyping,
        LifecyclePhase::Approval,
        LifecyclePhase::Development,
        LifecyclePhase::Testing,
        LifecyclePhase::Deployment,
        LifecyclePhase::Support,
    ];

    /// 1-based position in the lifecycle.
    pub fn number(&self) -> usize {
        *self as usize + 1
    }

    pub fn title(&self, lang: PromptLanguage) -> &'static str {
        match (lang, self) {
            (PromptLanguage::Es, LifecyclePhase::Genesis) => "GÉNESIS",
            (PromptLanguage::Es, LifecyclePhase::Analysis) => "ANÁLISIS",
            (PromptLanguage::Es, LifecyclePhase::Prototyping) => "PROTOTIPADO",
            (PromptLanguage::Es, LifecyclePhase::Approval) => "APROBACIÓN",
            (PromptLanguage::Es, LifecyclePhase::Development) => "DESARROLLO",
            (PromptLanguage::Es, LifecyclePhase::Testing) => "PRUEBAS",
            (PromptLanguage::Es, LifecyclePhase::Deployment) => "DESPLIEGUE",
            (PromptLanguage::Es, LifecyclePhase::Support) => "SOPORTE",
            (PromptLanguage::En, LifecyclePhase::Genesis) => "GENESIS",
            (PromptLanguage::En, LifecyclePhase::Analysis) => "ANALYSIS",
            (PromptLanguage::En, LifecyclePhase::Prototyping) => "PROTOTYPING",
            (PromptLanguage::En, LifecyclePhase::Approval) => "APPROVAL",
            (PromptLanguage::En, LifecyclePhase::Development) => "DEVELOPMENT",
            (PromptLanguage::En, LifecyclePhase::Testing) => "TESTING",
            (PromptLanguage::En, LifecyclePhase::Deployment) => "DEPLOYMENT",
            (PromptLanguage::En, LifecyclePhase::Support) => "SUPPORT",
        }
    }

    pub fn focus(&self, lang: PromptLanguage) -> &'static str {
        match (lang, self) {
            (PromptLanguage::Es, LifecyclePhase::Genesis) => {
                "Triage, ideas, urgencia y carga de trabajo inicial."
            }
            (PromptLanguage::Es, LifecyclePhase::Analysis) => {
                "Definición de alcance, Sponsor/Product Owner y viabilidad técnica."
            }
            (PromptLanguage::Es, LifecyclePhase::Prototyping) => {
                "Validación de concepto, MVP y Business Case."
            }
            (PromptLanguage::Es, LifecyclePhase::Approval) => {
                "Comités (CIP), CAPEX y decisión Go/No-Go."
            }
            (PromptLanguage::Es, LifecyclePhase::Development) => {
                "Ejecución, Vendors y gestión de recursos."
            }
            (PromptLanguage::Es, LifecyclePhase::Testing) => {
                "QA y Aprobación de Seguridad Informática."
            }
            (PromptLanguage::Es, LifecyclePhase::Deployment) => "Go Live y puesta en producción.",
            (PromptLanguage::Es, LifecyclePhase::Support) => {
                "Traspaso a Mesa de Ayuda (MDA) y OPEX."
            }
            (PromptLanguage::En, LifecyclePhase::Genesis) => {
                "Triage, ideas, urgency and initial workload."
            }
            (PromptLanguage::En, LifecyclePhase::Analysis) => {
                "Scope definition, Sponsor/Product Owner and technical feasibility."
            }
            (PromptLanguage::En, LifecyclePhase::Prototyping) => {
                "Proof of concept, MVP and Business Case."
            }
            (PromptLanguage::En, LifecyclePhase::Approval) => {
                "Committees (CIP), CAPEX and the Go/No-Go decision."
            }
            (PromptLanguage::En, LifecyclePhase::Development) => {
                "Execution, vendors and resource management."
            }
            (PromptLanguage::En, LifecyclePhase::Testing) => {
                "QA and information security sign-off."
            }
            (PromptLanguage::En, LifecyclePhase::Deployment) => "Go Live and production rollout.",
            (PromptLanguage::En, LifecyclePhase::Support) => {
                "Handover to the Help Desk (MDA) and OPEX."
            }
        }
    }
}

const PREAMBLE_ES: &str = "\
Actúa como un Experto en Oficina de Proyectos (PMO) y Calidad.
Analiza los siguientes comentarios de la retrospectiva anual del equipo de Innovación.

CONTEXTO:
El equipo NO usa Agile puro. Usamos un Ciclo de Vida de 8 Fases estandarizado.
Usa estas definiciones para clasificar los problemas:
";

const INSTRUCTIONS_ES: &str = "\
INSTRUCCIONES DE REPORTE (Formato Markdown):
1. 🌡️ **Termómetro Emocional** (1 frase resumen).
2. 🏆 **Puntos Fuertes** (Top 2 temas en KEEP). Indica qué fase del ciclo está funcionando bien.
3. ⚠️ **Cuellos de Botella** (Análisis de CHANGE/STOP). Asocia cada dolor a una de las 8 Fases \
(Ej: \"Problemas en Fase 4 por demoras en Comités\" o \"Falla en Fase 8 por mal traspaso a Soporte\").
4. 💡 **Recomendación de Gestión**: Una acción directiva basada en la Guía de Ciclo de Vida \
(Ej: \"Reforzar el Business Case en Fase 3\").

COMENTARIOS DEL EQUIPO:
";

const PREAMBLE_EN: &str = "\
Act as a Project Management Office (PMO) and Quality expert.
Analyze the following comments from the Innovation team's annual retrospective.

CONTEXT:
The team does NOT follow pure Agile. It works with a standardized 8-phase project lifecycle.
Use these definitions to classify the issues:
";

const INSTRUCTIONS_EN: &str = "\
REPORT INSTRUCTIONS (Markdown format):
1. 🌡️ **Emotional Thermometer** (one-sentence summary).
2. 🏆 **Strengths** (top 2 KEEP themes). State which lifecycle phase is working well.
3. ⚠️ **Bottlenecks** (CHANGE/STOP analysis). Map each pain point to one of the 8 phases \
(e.g. \"Phase 4 issues due to committee delays\" or \"Phase 8 failure due to a poor handover to Support\").
4. 💡 **Management Recommendation**: one directive action based on the lifecycle guide \
(e.g. \"Strengthen the Business Case in Phase 3\").

TEAM COMMENTS:
";

/// The static instruction block sent ahead of the comments, in `lang`.
pub fn template_for(lang: PromptLanguage) -> String {
    let (preamble, instructions) = match lang {
        PromptLanguage::Es => (PREAMBLE_ES, INSTRUCTIONS_ES),
        PromptLanguage::En => (PREAMBLE_EN, INSTRUCTIONS_EN),
    };

    let mut out = String::from(preamble);
    out.push('\n');
    for phase in LifecyclePhase::ALL {
        out.push_str(&format!(
            "{}. {}: {}\n",
            phase.number(),
            phase.title(lang),
            phase.focus(lang)
        ));
    }
    out.push('\n');
    out.push_str(instructions);
    out
}

/// Template in the default language.
pub fn prompt_template() -> String {
    template_for(PromptLanguage::default())
}

/// `- [<category>] <comment>` per row, table order.
pub fn render_comments(table: &FeedbackTable) -> String {
    let mut txt = String::new();
    for row in table {
        txt.push_str(&format!(
            "- [{}] {}\n",
            row.category_label(),
            row.comment_text()
        ));
    }
    txt
}

pub fn build_prompt(table: &FeedbackTable) -> String {
    build_prompt_in(table, PromptLanguage::default())
}

pub fn build_prompt_in(table: &FeedbackTable, lang: PromptLanguage) -> String {
    let mut prompt = template_for(lang);
    prompt.push_str(&render_comments(table));
    prompt
}
