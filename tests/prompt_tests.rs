use retroboard::core::prompt::{
    LifecyclePhase, PromptLanguage, build_prompt, build_prompt_in, prompt_template,
    render_comments, template_for,
};
use retroboard::models::feedback::{FeedbackRow, FeedbackTable};

fn sample() -> FeedbackTable {
    FeedbackTable::new(vec![
        FeedbackRow::new("t1", Some("KEEP"), Some("good")),
        FeedbackRow::new("t2", Some("Change"), Some("slow approvals")),
        FeedbackRow::new("t3", None, None),
    ])
}

#[test]
fn test_comments_rendered_one_bullet_per_row_in_order() {
    assert_eq!(
        render_comments(&sample()),
        "- [KEEP] good\n- [Change] slow approvals\n- [] \n"
    );
}

#[test]
fn test_prompt_is_template_followed_by_comments() {
    let prompt = build_prompt(&sample());
    let template = prompt_template();

    assert!(prompt.starts_with(&template));
    assert_eq!(&prompt[template.len()..], render_comments(&sample()));
}

#[test]
fn test_template_lists_the_eight_phases_in_order() {
    for lang in [PromptLanguage::Es, PromptLanguage::En] {
        let template = template_for(lang);

        let mut last = 0;
        for phase in LifecyclePhase::ALL {
            let line = format!(
                "{}. {}: {}",
                phase.number(),
                phase.title(lang),
                phase.focus(lang)
            );
            let pos = template
                .find(&line)
                .unwrap_or_else(|| panic!("missing {line}"));
            assert!(pos >= last, "{} out of order", phase.title(lang));
            last = pos;
        }
    }
    assert_eq!(LifecyclePhase::Support.number(), 8);
}

#[test]
fn test_default_template_keeps_spanish_wording() {
    assert_eq!(PromptLanguage::default(), PromptLanguage::Es);

    let template = prompt_template();
    assert!(template.starts_with("Actúa como un Experto en Oficina de Proyectos (PMO) y Calidad."));
    assert!(template.contains("4. APROBACIÓN: Comités (CIP), CAPEX y decisión Go/No-Go."));
    assert!(template.contains("8. SOPORTE: Traspaso a Mesa de Ayuda (MDA) y OPEX."));
    assert!(template.ends_with("COMENTARIOS DEL EQUIPO:\n"));
}

#[test]
fn test_english_template_keeps_acronyms() {
    let template = template_for(PromptLanguage::En);
    assert!(template.contains("Committees (CIP)"));
    assert!(template.contains("Help Desk (MDA)"));
    assert!(template.ends_with("TEAM COMMENTS:\n"));
}

#[test]
fn test_template_is_static() {
    assert_eq!(prompt_template(), prompt_template());
    assert_eq!(
        template_for(PromptLanguage::En),
        template_for(PromptLanguage::En)
    );
}

#[test]
fn test_prompt_in_language_uses_that_template() {
    let prompt = build_prompt_in(&sample(), PromptLanguage::En);
    assert_eq!(
        prompt,
        format!(
            "{}{}",
            template_for(PromptLanguage::En),
            render_comments(&sample())
        )
    );
}

#[test]
fn test_empty_table_prompt_is_template_only() {
    assert_eq!(build_prompt(&FeedbackTable::default()), prompt_template());
}
