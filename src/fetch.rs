use crate::content::ContentBundle;
use crate::render::{PageRenderer, PageRequest};
use crate::scoring::{ScoreReport, ScoringConfig, SeoCalculator};
use crate::tips::TipCatalog;

/// Ask `renderer` for the full page once and store it on the bundle.
///
/// Returns whether fresh rendered content was stored. On failure the bundle
/// keeps whatever rendered content it already had (possibly none, in which
/// case the page checks read the body content instead).
pub async fn load_rendered_content<R: PageRenderer>(
    bundle: &mut ContentBundle,
    renderer: &R,
) -> bool {
    let result = renderer.render(&PageRequest::from_bundle(bundle)).await;

    match result {
        Ok(html) => {
            tracing::debug!(url = bundle.url(), bytes = html.len(), "rendered page loaded");
            bundle.set_rendered_content(html);
            true
        }
        Err(e) => {
            tracing::warn!(
                url = bundle.url(),
                error = %format!("{:#}", e),
                "rendering failed, scoring against available content"
            );
            false
        }
    }
}

/// Render the page if the bundle has no rendered content yet, then score it.
///
/// Rendered content the caller supplied is never replaced. Use
/// [`load_rendered_content`] to force a fresh render.
pub async fn render_and_score<R: PageRenderer>(
    mut bundle: ContentBundle,
    renderer: Option<&R>,
    scoring: &ScoringConfig,
    tips: &TipCatalog,
) -> ScoreReport {
    let supplied = bundle
        .rendered_content()
        .is_some_and(|html| !html.trim().is_empty());

    match renderer {
        Some(_) if supplied => {
            tracing::debug!(url = bundle.url(), "using supplied rendered content");
        }
        Some(renderer) => {
            load_rendered_content(&mut bundle, renderer).await;
        }
        None => {}
    }

    let calculator = SeoCalculator::new(bundle, scoring.clone()).with_tip_catalog(tips.clone());
    let report = calculator.report();

    tracing::debug!(
        mode = %report.mode,
        score = report.score,
        threshold = report.threshold,
        percentage = report.percentage,
        "page scored"
    );

    report
}
