use std::sync::Arc;

use tera::{Context, Tera};

use crate::error::Result;
use crate::views::PageView;

const TEMPLATES: [(&str, &str); 8] = [
    ("base.html", include_str!("../../templates/base.html")),
    ("index.html", include_str!("../../templates/index.html")),
    ("partials/header.html", include_str!("../../templates/partials/header.html")),
    ("partials/navigation.html", include_str!("../../templates/partials/navigation.html")),
    ("partials/sidebar.html", include_str!("../../templates/partials/sidebar.html")),
    ("partials/job_card.html", include_str!("../../templates/partials/job_card.html")),
    ("partials/job_categories.html", include_str!("../../templates/partials/job_categories.html")),
    ("partials/chatbot.html", include_str!("../../templates/partials/chatbot.html")),
];

/// Compiled page templates. Built once at startup and shared.
#[derive(Clone)]
pub struct Renderer {
    tera: Arc<Tera>,
}

impl Renderer {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES.to_vec())?;
        tera.autoescape_on(vec![".html"]);
        Ok(Self {
            tera: Arc::new(tera),
        })
    }

    pub fn render_page(&self, view: &PageView) -> Result<String> {
        let context = Context::from_serialize(view)?;
        Ok(self.tera.render("index.html", &context)?)
    }
}
