//! 静的HTMLページの組み立て
//!
//! Webアプリと同じクラス名を使い、タブはページ間リンクで表現する。

use super::slug::TagSlugs;
use portfolio_common::{
    timeline, ContactInfo, ExperienceItem, ProjectCard, ProjectCatalog, Section, SiteContent,
    TimelineSide, ALL_TAG,
};
use std::fmt::Write;

/// HTMLエスケープ（テキスト・属性値共通）
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// ページの階層（相対リンクの接頭辞を決める）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDepth {
    /// index.html
    Root,
    /// tags/<slug>.html
    Tag,
}

impl PageDepth {
    fn prefix(&self) -> &'static str {
        match self {
            PageDepth::Root => "",
            PageDepth::Tag => "../",
        }
    }
}

/// 相対パスの素材だけ接頭辞を付ける
fn asset_url(depth: PageDepth, url: &str) -> String {
    let is_absolute = url.contains("://")
        || url.starts_with('/')
        || url.starts_with('#')
        || url.starts_with("mailto:")
        || url.starts_with("data:");
    if is_absolute {
        url.to_string()
    } else {
        format!("{}{}", depth.prefix(), url)
    }
}

/// タブのリンク先
pub fn tag_href(depth: PageDepth, slugs: &TagSlugs, tag: &str) -> String {
    let page = match slugs.get(tag) {
        Some(slug) => format!("tags/{}.html", slug),
        None => "index.html".to_string(),
    };
    format!("{}{}{}", depth.prefix(), page, Section::Projects.anchor())
}

/// ページ全体を組み立てる
pub fn render_page(
    content: &SiteContent,
    catalog: &ProjectCatalog,
    slugs: &TagSlugs,
    selected: &str,
    depth: PageDepth,
    year: i32,
) -> String {
    let mut html = String::new();
    let title = if selected == ALL_TAG {
        format!("{} - Portfolio", content.owner)
    } else {
        format!("{} - {} - Portfolio", content.owner, selected)
    };

    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\" />\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n\
         <title>{}</title>\n<link rel=\"stylesheet\" href=\"{}style.css\" />\n</head>\n\
         <body>\n<div class=\"min-h-screen bg-background\">\n",
        escape(&title),
        depth.prefix()
    );

    render_header(&mut html);
    html.push_str("<main class=\"container mx-auto px-4 pt-24\">\n");
    render_hero(&mut html, content, depth);
    render_projects(&mut html, content, catalog, slugs, selected, depth);
    render_experience(&mut html, content, depth);
    render_contact(&mut html, &content.contact);
    html.push_str("</main>\n");
    render_footer(&mut html, &content.owner, &content.contact, year);
    html.push_str("</div>\n</body>\n</html>\n");

    html
}

fn render_header(html: &mut String) {
    html.push_str(
        "<header class=\"fixed top-0 left-0 right-0 z-50 bg-background-blur border-b\">\n\
         <div class=\"container mx-auto px-4 py-4 flex justify-between items-center\">\n\
         <div class=\"font-bold text-xl\">Portfolio</div>\n<nav class=\"flex space-x-6\">\n",
    );
    for section in Section::ALL {
        let _ = writeln!(
            html,
            "<a class=\"nav-link\" href=\"{}\">{}</a>",
            section.anchor(),
            section.label()
        );
    }
    html.push_str("</nav>\n</div>\n</header>\n");
}

fn render_hero(html: &mut String, content: &SiteContent, depth: PageDepth) {
    let profile = &content.profile;
    let _ = write!(
        html,
        "<section id=\"{}\" class=\"py-12\">\n\
         <div class=\"w-full hero flex items-center justify-center py-20 bg-background\">\n\
         <div class=\"container px-4 flex flex-col lg-flex-row items-center gap-12\">\n\
         <div class=\"flex-1 space-y-6\">\n\
         <div class=\"space-y-2\">\n\
         <h1 class=\"text-4xl font-bold tracking-tighter\">Hi, I&#39;m {}</h1>\n\
         <h2 class=\"text-2xl font-medium text-primary\">{}</h2>\n</div>\n\
         <p class=\"max-w-prose text-muted-foreground text-lg\">{}</p>\n\
         <div class=\"flex flex-wrap gap-4\">\n\
         <a class=\"btn btn-primary btn-lg\" href=\"{}\">View My Work</a>\n\
         <a class=\"btn btn-outline btn-lg\" href=\"{}\" download>Download Resume</a>\n</div>\n",
        Section::Hero.id(),
        escape(&profile.name),
        escape(&profile.title),
        escape(&profile.description),
        Section::Projects.anchor(),
        escape(&asset_url(depth, &profile.resume_url)),
    );

    html.push_str("<div class=\"flex items-center gap-4 pt-4\">\n");
    let links = [
        (&profile.social_links.github, "GitHub", true),
        (&profile.social_links.linkedin, "LinkedIn", true),
        (&profile.social_links.email, "Email", false),
    ];
    for (href, label, new_tab) in links {
        if let Some(href) = href {
            let target = if new_tab {
                " target=\"_blank\" rel=\"noopener noreferrer\""
            } else {
                ""
            };
            let _ = writeln!(
                html,
                "<a class=\"social-link\" href=\"{}\"{}>{}</a>",
                escape(href),
                target,
                label
            );
        }
    }
    html.push_str("</div>\n</div>\n");

    let _ = write!(
        html,
        "<div class=\"flex-shrink-0\">\n<div class=\"avatar rounded-full overflow-hidden shadow-xl\">\n\
         <img src=\"{}\" alt=\"{}\" class=\"w-full h-full object-cover\" />\n</div>\n</div>\n\
         </div>\n</div>\n</section>\n",
        escape(&asset_url(depth, &profile.avatar_url)),
        escape(&profile.avatar_alt()),
    );
}

fn render_projects(
    html: &mut String,
    content: &SiteContent,
    catalog: &ProjectCatalog,
    slugs: &TagSlugs,
    selected: &str,
    depth: PageDepth,
) {
    let _ = write!(
        html,
        "<section id=\"{}\" class=\"py-16\">\n<div class=\"container mx-auto px-4\">\n\
         <div class=\"text-center mb-12\">\n<h2 class=\"text-3xl font-bold mb-4\">{}</h2>\n\
         <p class=\"text-muted-foreground max-w-2xl mx-auto\">{}</p>\n</div>\n\
         <div class=\"flex justify-center mb-8\">\n<div class=\"tabs-list\" role=\"tablist\">\n",
        Section::Projects.id(),
        escape(&content.projects_heading.title),
        escape(&content.projects_heading.subtitle),
    );

    for tag in catalog.tags().iter() {
        let active = tag == selected;
        let _ = writeln!(
            html,
            "<a class=\"tabs-trigger capitalize{}\" role=\"tab\" aria-selected=\"{}\" href=\"{}\">{}</a>",
            if active { " active" } else { "" },
            active,
            escape(&tag_href(depth, slugs, tag)),
            escape(tag)
        );
    }
    html.push_str("</div>\n</div>\n");

    let filtered = catalog.filtered(selected);
    if filtered.is_empty() {
        html.push_str("<p class=\"empty-state text-muted-foreground\">No projects match this filter.</p>\n");
    } else {
        html.push_str("<div class=\"grid grid-cols-1 md-grid-cols-2 lg-grid-cols-3 gap-8\">\n");
        for record in filtered {
            render_card(html, &ProjectCard::from(record), depth);
        }
        html.push_str("</div>\n");
    }

    let _ = write!(
        html,
        "<div class=\"text-center mt-12\">\n<a class=\"btn btn-outline btn-lg\" href=\"{}\">View All Projects</a>\n</div>\n\
         </div>\n</section>\n",
        escape(&tag_href(depth, slugs, ALL_TAG)),
    );
}

fn render_card(html: &mut String, card: &ProjectCard, depth: PageDepth) {
    let _ = write!(
        html,
        "<div class=\"card overflow-hidden h-full flex flex-col\">\n\
         <div class=\"card-image relative overflow-hidden\"><img src=\"{}\" alt=\"{}\" class=\"w-full h-full object-cover\" /></div>\n\
         <div class=\"card-header pb-2\"><h3 class=\"text-xl font-bold\">{}</h3></div>\n\
         <div class=\"card-content flex-grow\">\n<p class=\"text-muted-foreground mb-4\">{}</p>\n\
         <div class=\"flex flex-wrap gap-2\">",
        escape(&asset_url(depth, &card.image)),
        escape(card.image_alt()),
        escape(&card.title),
        escape(&card.description),
    );
    for tag in &card.tags {
        let _ = write!(html, "<span class=\"badge badge-secondary\">{}</span>", escape(tag));
    }
    let _ = write!(
        html,
        "</div>\n</div>\n<div class=\"card-footer flex justify-between pt-4 gap-2\">\n\
         <a class=\"btn btn-outline btn-sm\" href=\"{}\" target=\"{}\" rel=\"{}\">Code</a>\n</div>\n</div>\n",
        escape(&card.repo_url),
        ProjectCard::LINK_TARGET,
        ProjectCard::LINK_REL,
    );
}

fn render_experience(html: &mut String, content: &SiteContent, depth: PageDepth) {
    let _ = write!(
        html,
        "<section id=\"{}\" class=\"py-16\">\n<div class=\"max-w-6xl mx-auto\">\n\
         <div class=\"text-center mb-12\">\n<h2 class=\"text-3xl font-bold mb-4\">{}</h2>\n\
         <p class=\"text-muted-foreground text-lg max-w-2xl mx-auto\">{}</p>\n</div>\n\
         <div class=\"timeline relative\">\n<div class=\"timeline-line\"></div>\n<div class=\"space-y-12\">\n",
        Section::Experience.id(),
        escape(&content.experience_heading.title),
        escape(&content.experience_heading.subtitle),
    );

    for entry in timeline(&content.experiences) {
        render_timeline_row(html, entry.item, entry.side, depth);
    }

    html.push_str("</div>\n</div>\n</div>\n</section>\n");
}

fn render_timeline_row(html: &mut String, item: &ExperienceItem, side: TimelineSide, depth: PageDepth) {
    let row_class = match side {
        TimelineSide::Left => "timeline-row",
        TimelineSide::Right => "timeline-row reverse",
    };
    let _ = write!(
        html,
        "<div class=\"{}\">\n<div class=\"timeline-half p-4\">\n<div class=\"timeline-card-wrap {}\">\n\
         <div class=\"card timeline-card\">\n<div class=\"card-header flex items-center gap-4 pb-2\">\n",
        row_class,
        side.as_str(),
    );

    if let Some(logo) = &item.logo {
        let _ = writeln!(
            html,
            "<div class=\"logo rounded-full overflow-hidden bg-muted flex items-center justify-center\">\
             <img src=\"{}\" alt=\"{} logo\" class=\"object-contain\" /></div>",
            escape(&asset_url(depth, logo)),
            escape(&item.company),
        );
    }

    let _ = write!(
        html,
        "<div>\n<h3 class=\"text-xl font-semibold\">{}</h3>\n\
         <div class=\"text-muted-foreground flex gap-2\"><span class=\"font-medium\">{}</span>\
         <span class=\"separator\">&bull;</span><span>{}</span></div>\n\
         <div class=\"text-sm text-muted-foreground mt-1\">{}</div>\n</div>\n</div>\n\
         <div class=\"card-content\">\n<p class=\"mb-4\">{}</p>\n",
        escape(&item.position),
        escape(&item.company),
        escape(&item.duration),
        escape(&item.location),
        escape(&item.description),
    );

    if !item.achievements.is_empty() {
        html.push_str("<div class=\"mb-4\">\n<h4 class=\"font-semibold mb-2\">Key Achievements:</h4>\n<ul class=\"list-disc pl-5 space-y-1\">\n");
        for achievement in &item.achievements {
            let _ = writeln!(html, "<li class=\"text-sm\">{}</li>", escape(achievement));
        }
        html.push_str("</ul>\n</div>\n");
    }

    html.push_str("<div class=\"flex flex-wrap gap-2\">");
    for skill in &item.skills {
        let _ = write!(html, "<span class=\"badge badge-secondary\">{}</span>", escape(skill));
    }
    let _ = write!(
        html,
        "</div>\n</div>\n</div>\n</div>\n</div>\n\
         <div class=\"timeline-dot-wrap\"><div class=\"timeline-dot{}\"></div></div>\n</div>\n",
        if item.current { " current" } else { "" },
    );
}

fn render_contact(html: &mut String, contact: &ContactInfo) {
    let _ = write!(
        html,
        "<section id=\"{}\" class=\"py-16\">\n<h2 class=\"text-3xl font-bold mb-8\">Contact</h2>\n\
         <div class=\"grid md-grid-cols-2 gap-8\">\n<div>\n<p class=\"text-lg mb-6\">{}</p>\n\
         <div class=\"flex flex-col space-y-4\">\n\
         <a class=\"hover-primary\" href=\"{}\">{}</a>\n\
         <a class=\"hover-primary\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>\n\
         <a class=\"hover-primary\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>\n\
         </div>\n</div>\n</div>\n</section>\n",
        Section::Contact.id(),
        escape(&contact.intro),
        escape(&contact.email.href),
        escape(&contact.email.label),
        escape(&contact.github.href),
        escape(&contact.github.label),
        escape(&contact.linkedin.href),
        escape(&contact.linkedin.label),
    );
}

fn render_footer(html: &mut String, owner: &str, contact: &ContactInfo, year: i32) {
    let _ = write!(
        html,
        "<footer class=\"bg-muted py-8 mt-16\">\n<div class=\"container mx-auto px-4 text-center\">\n\
         <p class=\"text-muted-foreground\">&copy; {} {}. All rights reserved.</p>\n\
         <div class=\"flex justify-center space-x-4 mt-4\">\n\
         <a class=\"footer-icon\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" aria-label=\"GitHub\">GitHub</a>\n\
         <a class=\"footer-icon\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" aria-label=\"LinkedIn\">LinkedIn</a>\n\
         <a class=\"footer-icon\" href=\"{}\" aria-label=\"Email\">Email</a>\n\
         </div>\n</div>\n</footer>\n",
        year,
        escape(owner),
        escape(&contact.github.href),
        escape(&contact.linkedin.href),
        escape(&contact.email.href),
    );
}
