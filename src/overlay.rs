use crate::constants::{DIAGNOSTIC_STYLE, SCORE_ID, SCORE_STYLE};
use pick_core::{score_label, DisplaySink};
use web_sys as web;

/// `Score: N` text pinned to the top-left corner of the page.
pub struct ScoreOverlay {
    el: web::Element,
}

impl ScoreOverlay {
    /// Reuse `#score` if the page has one, otherwise append it to `<body>`.
    pub fn attach(document: &web::Document) -> anyhow::Result<Self> {
        let el = match document.get_element_by_id(SCORE_ID) {
            Some(el) => el,
            None => {
                let el = document
                    .create_element("div")
                    .map_err(|e| anyhow::anyhow!("{:?}", e))?;
                el.set_id(SCORE_ID);
                let body = document
                    .body()
                    .ok_or_else(|| anyhow::anyhow!("no body"))?;
                body.append_child(&el)
                    .map_err(|e| anyhow::anyhow!("{:?}", e))?;
                el
            }
        };
        _ = el.set_attribute("style", SCORE_STYLE);
        let overlay = Self { el };
        overlay.show(0);
        Ok(overlay)
    }

    fn show(&self, score: u32) {
        self.el.set_text_content(Some(&score_label(score)));
    }
}

impl DisplaySink for ScoreOverlay {
    fn set_score(&mut self, score: u32) {
        self.show(score);
    }
}

/// Replace the score line with a startup failure message.
pub fn show_diagnostic(document: &web::Document, message: &str) {
    let el = match document.get_element_by_id(SCORE_ID) {
        Some(el) => el,
        None => {
            let Ok(el) = document.create_element("div") else {
                return;
            };
            el.set_id(SCORE_ID);
            if let Some(body) = document.body() {
                _ = body.append_child(&el);
            }
            el
        }
    };
    _ = el.set_attribute("style", DIAGNOSTIC_STYLE);
    el.set_text_content(Some(message));
}
