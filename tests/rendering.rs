use cvforge::app::{AppState, BuilderTab, ResumeStore};
use cvforge::domain::{DateInput, FontSize, NewExperience, Resume, StylePatch};
use cvforge::ui::format::{format_date_input, font_px};
use cvforge::ui::{self, viewmodel, PreviewSettings, Template};

fn plain_state(resume_setup: impl FnOnce(&mut ResumeStore)) -> AppState {
    let mut store = ResumeStore::new();
    resume_setup(&mut store);
    AppState::new(
        store,
        PreviewSettings {
            color: false,
            ..PreviewSettings::default()
        },
    )
}

#[test]
fn empty_date_formats_as_empty_string() {
    assert_eq!(format_date_input(&DateInput::from("")), "");
}

#[test]
fn unknown_template_renders_as_modern() {
    let unknown = ui::render(&plain_state(|s| {
        s.load_dummy_resume();
        s.update_template("art-deco");
    }));
    let modern = ui::render(&plain_state(|s| {
        s.load_dummy_resume();
        s.update_template("modern");
    }));

    assert_eq!(unknown, modern);
    assert!(unknown.starts_with("Modern · "));
}

#[test]
fn each_template_renders_distinctly() {
    let outputs: Vec<String> = Template::ALL
        .iter()
        .map(|t| {
            ui::render(&plain_state(|s| {
                s.load_dummy_resume();
                s.update_template(t.id());
            }))
        })
        .collect();

    for (i, a) in outputs.iter().enumerate() {
        for b in outputs.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn missing_end_date_renders_start_only() {
    let out = ui::render(&plain_state(|s| {
        s.add_experience(NewExperience {
            company: "Acme".to_string(),
            position: "Engineer".to_string(),
            start_date: DateInput::from("2022-03-01"),
            end_date: DateInput::from(""),
            description: String::new(),
        });
    }));

    assert!(out.contains("Mar 2022"));
    assert!(!out.contains("Mar 2022 -"));
    assert!(!out.contains("Invalid"));
}

#[test]
fn unknown_font_size_uses_large_pixels() {
    assert_eq!(font_px(&FontSize::from("huge")), 14);

    let out = ui::render(&plain_state(|s| {
        s.update_style_customizations(&StylePatch {
            font_size: Some(FontSize::from("huge")),
            spacing: Some(2.0),
            ..StylePatch::default()
        });
    }));
    assert!(out.starts_with("Modern · Inter · 14px · line height 3.00"));
}

#[test]
fn spacing_changes_entry_gaps() {
    let render_with = |spacing: f64| {
        let mut resume = Resume::sample();
        resume.style_customizations.spacing = spacing;
        let vm = viewmodel::compute(&resume, BuilderTab::default());
        ui::render_viewmodel(
            &vm,
            &PreviewSettings {
                color: false,
                ..PreviewSettings::default()
            },
        )
    };

    let tight = render_with(0.5).lines().count();
    let normal = render_with(1.0).lines().count();
    let loose = render_with(2.0).lines().count();
    assert!(tight < normal && normal < loose);
}

#[test]
fn narrow_width_keeps_lines_bounded() {
    let mut state = plain_state(|s| s.load_dummy_resume());
    state.preview.width = 40;

    for template in Template::ALL {
        state.store.update_template(template.id());
        let out = ui::render(&state);
        for line in out.lines() {
            assert!(line.chars().count() <= 40, "{template:?}: {line:?}");
        }
    }
}
