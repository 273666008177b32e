//! Detail fragment generation.
//!
//! Everything here is a pure function of a [`Project`]. Text and attribute
//! values are escaped, so catalogs loaded from JSON cannot inject markup.

use std::fmt;

use crate::model::{Media, MediaKind, Project};

const WELCOME: &str = concat!(
    r#"<div class="intro-view">"#,
    r#"<div class="welcome-msg">"#,
    "<h3>Welcome.</h3>",
    "<p>Select a project from the left to view details.</p>",
    "</div>",
    "</div>",
);

/// Markup of the welcome view shown in the desktop container.
pub fn render_welcome() -> &'static str {
    WELCOME
}

/// Markup of the full detail view for one project.
pub fn render_detail(project: &Project) -> String {
    DetailFragment(project).to_string()
}

/// Escape text for use in element content or a quoted attribute.
pub fn escape(text: &str) -> Escaped<'_> {
    Escaped(text)
}

/// Display adapter produced by [`escape`].
pub struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.0;
        while let Some(pos) = rest.find(['&', '<', '>', '"', '\'']) {
            f.write_str(&rest[..pos])?;
            let entity = match rest.as_bytes()[pos] {
                b'&' => "&amp;",
                b'<' => "&lt;",
                b'>' => "&gt;",
                b'"' => "&quot;",
                _ => "&#39;",
            };
            f.write_str(entity)?;
            rest = &rest[pos + 1..];
        }
        f.write_str(rest)
    }
}

struct DetailFragment<'a>(&'a Project);

impl DetailFragment<'_> {
    fn write_media(&self, f: &mut fmt::Formatter<'_>, media: &Media) -> fmt::Result {
        let src = escape(&media.path);
        f.write_str(r#"<div class="carousel-item">"#)?;
        match media.kind {
            MediaKind::Video => write!(
                f,
                r#"<video autoplay loop muted playsinline><source src="{}" type="video/mp4">Your browser does not support the video tag.</video>"#,
                src
            )?,
            MediaKind::Image => write!(
                f,
                r#"<img src="{}" alt="{} screenshot" loading="lazy">"#,
                src,
                escape(&self.0.title)
            )?,
        }
        f.write_str("</div>")
    }
}

impl fmt::Display for DetailFragment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let project = self.0;

        f.write_str(r#"<article class="project-detail">"#)?;
        f.write_str(r#"<header class="project-header">"#)?;
        write!(f, r#"<h2 class="project-title">{}</h2>"#, escape(&project.title))?;
        f.write_str(r#"<div class="tag-container">"#)?;
        for tag in &project.tags {
            write!(f, r#"<span class="project-tag">{}</span>"#, escape(tag))?;
        }
        f.write_str("</div></header>")?;

        write!(
            f,
            r#"<div class="project-description"><p>{}</p></div>"#,
            escape(&project.description)
        )?;

        f.write_str(r#"<div class="carousel">"#)?;
        for media in &project.media {
            self.write_media(f, media)?;
        }
        f.write_str("</div></article>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, ProjectRecord};

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn test_title_rendered_for_every_project() {
        for project in Catalog::builtin().iter() {
            let html = render_detail(project);
            let expected = format!(r#"<h2 class="project-title">{}</h2>"#, escape(&project.title));
            assert!(html.contains(&expected), "missing title for {}", project.title);
        }
    }

    #[test]
    fn test_one_chip_per_tag() {
        for project in Catalog::builtin().iter() {
            let html = render_detail(project);
            assert_eq!(count(&html, r#"class="project-tag""#), project.tags.len());
        }
    }

    #[test]
    fn test_legacy_category_renders_single_chip() {
        let catalog = Catalog::from_records(vec![ProjectRecord {
            id: 9,
            title: "Legacy".to_string(),
            category: Some("Print".to_string()),
            ..Default::default()
        }])
        .expect("valid record");
        let html = render_detail(catalog.get(9).expect("present"));

        assert_eq!(count(&html, r#"class="project-tag""#), 1);
        assert!(html.contains(r#"<span class="project-tag">Print</span>"#));
    }

    #[test]
    fn test_media_dispatch_in_order() {
        let project = Project::new(1, "Mixed", &["x"], "d", &["a.png", "b.mp4"]);
        let html = render_detail(&project);

        assert_eq!(count(&html, r#"class="carousel-item""#), 2);
        assert_eq!(count(&html, "<img "), 1);
        assert_eq!(count(&html, "<video "), 1);

        let image_at = html.find(r#"<img src="a.png""#).expect("image item");
        let video_at = html.find(r#"<source src="b.mp4""#).expect("video item");
        assert!(image_at < video_at);
    }

    #[test]
    fn test_video_attributes() {
        let project = Project::new(1, "V", &["x"], "d", &["clip.mp4"]);
        let html = render_detail(&project);
        assert!(html.contains("<video autoplay loop muted playsinline>"));
        assert!(!html.contains("controls"));
    }

    #[test]
    fn test_image_is_lazy_with_alt() {
        let project = Project::new(1, "Shot", &["x"], "d", &["s.jpg"]);
        let html = render_detail(&project);
        assert!(html.contains(r#"<img src="s.jpg" alt="Shot screenshot" loading="lazy">"#));
    }

    #[test]
    fn test_empty_media_renders_empty_carousel() {
        let project = Project::new(1, "Bare", &["x"], "d", &[]);
        let html = render_detail(&project);
        assert!(html.contains(r#"<div class="carousel"></div>"#));
    }

    #[test]
    fn test_render_is_deterministic() {
        let catalog = Catalog::builtin();
        let project = catalog.get(2).expect("present");
        assert_eq!(render_detail(project), render_detail(project));
    }

    #[test]
    fn test_text_is_escaped() {
        let project = Project::new(
            1,
            "<b>Bold</b>",
            &["R&D"],
            r#"Say "hi" & <script>alert('x')</script>"#,
            &[r#"x".png"#],
        );
        let html = render_detail(&project);

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;b&gt;Bold&lt;/b&gt;"));
        assert!(html.contains("R&amp;D"));
        assert!(html.contains("&quot;hi&quot;"));
        assert!(html.contains("alert(&#39;x&#39;)"));
        assert!(html.contains(r#"src="x&quot;.png""#));
    }

    #[test]
    fn test_escape_passthrough() {
        assert_eq!(escape("plain text").to_string(), "plain text");
        assert_eq!(escape("").to_string(), "");
    }

    #[test]
    fn test_welcome_markup() {
        assert!(render_welcome().contains(r#"class="intro-view""#));
        assert!(render_welcome().contains("Welcome."));
    }
}
