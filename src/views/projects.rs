// ============================================================================
// PROJECTS VIEW - Búsqueda, orden, rejilla y detalle de proyectos
// ============================================================================
// La rejilla y el detalle se actualizan de forma incremental para que el
// input de búsqueda conserve el foco mientras se escribe.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{event_target_value, on_change, on_click, on_input, ElementBuilder};
use crate::models::{Project, SectionId, SortOption};
use crate::state::app_state::{AppState, IncrementalUpdate, UpdateType};
use crate::utils::i18n::{t, Language};
use crate::viewmodels::ProjectsViewModel;
use crate::views::render_nav_link;

pub fn render_projects(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.preferences.language();

    let grid = ElementBuilder::new("div")?
        .id("project-grid")?
        .class("project-grid-container")
        .child(render_project_grid(state)?)?
        .build();

    let detail = ElementBuilder::new("div")?
        .id("project-detail")?
        .child(render_project_detail(state)?)?
        .build();

    Ok(ElementBuilder::new("section")?
        .id("projects")?
        .class("section projects-section")
        .child(render_nav_link(state, SectionId::Main, &t("backToHome", lang), "btn-back")?)?
        .child(ElementBuilder::new("h2")?.text(&t("projectsTitle", lang)).build())?
        .child(ElementBuilder::new("p")?.class("section-description").text(&t("projectsDescription", lang)).build())?
        .child(render_controls(state, lang)?)?
        .child(grid)?
        .child(detail)?
        .build())
}

fn render_controls(state: &AppState, lang: Language) -> Result<Element, JsValue> {
    let (query, sort) = {
        let vm = state.projects.borrow();
        (vm.query().to_string(), vm.sort())
    };

    let search = ElementBuilder::new("input")?
        .id("project-search")?
        .class("project-search")
        .attr("type", "search")?
        .attr("placeholder", &t("searchProjects", lang))?
        .attr("value", &query)?
        .build();
    {
        let projects = state.projects.clone();
        on_input(&search, move |e| {
            let value = event_target_value(&e);
            projects.borrow_mut().set_query(&value);
            crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::ProjectGrid));
        })?;
    }

    let select = ElementBuilder::new("select")?
        .id("project-sort")?
        .class("project-sort")
        .build();
    for (option, label) in [
        (SortOption::Updated, t("updated", lang)),
        (SortOption::Alphabetical, t("alphabetical", lang)),
    ] {
        let opt = ElementBuilder::new("option")?
            .attr("value", option.slug())?
            .flag("selected", option == sort)?
            .text(&label)
            .build();
        select.append_child(&opt)?;
    }
    {
        let projects = state.projects.clone();
        on_change(&select, move |e| {
            match SortOption::from_slug(&event_target_value(&e)) {
                Some(sort) => projects.borrow_mut().set_sort(sort),
                None => return,
            }
            crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::ProjectGrid));
        })?;
    }

    let sort_label = ElementBuilder::new("label")?
        .attr("for", "project-sort")?
        .text(&t("sortBy", lang))
        .build();

    Ok(ElementBuilder::new("div")?
        .class("project-controls")
        .child(search)?
        .child(sort_label)?
        .child(select)?
        .build())
}

/// Tarjetas visibles + "mostrar más", o el aviso de sin resultados
pub fn render_project_grid(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.preferences.language();
    let vm = state.projects.borrow();
    let visible = vm.visible(lang);

    let grid = ElementBuilder::new("div")?.class("project-grid").build();

    if visible.is_empty() {
        let empty = ElementBuilder::new("p")?
            .class("no-projects")
            .text(&t("noProjectsFound", lang))
            .build();
        grid.append_child(&empty)?;
        return Ok(grid);
    }

    for project in &visible {
        let card = render_project_card(state, project, lang)?;
        grid.append_child(&card)?;
    }

    if vm.has_more(lang) {
        let more = ElementBuilder::new("button")?
            .class("btn-show-more")
            .attr("type", "button")?
            .text(&t("showMore", lang))
            .build();
        let projects = state.projects.clone();
        on_click(&more, move |_e| {
            projects.borrow_mut().show_more();
            crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::ProjectGrid));
        })?;
        grid.append_child(&more)?;
    }

    Ok(grid)
}

fn render_project_card(state: &AppState, project: &Project, lang: Language) -> Result<Element, JsValue> {
    let tags = render_tags(project)?;

    let card = ElementBuilder::new("article")?
        .class("project-card")
        .attr("data-project-id", &project.id.to_string())?
        .attr("tabindex", "0")?
        .child(
            ElementBuilder::new("img")?
                .class("project-image")
                .attr("src", &project.image)?
                .attr("alt", &project.title)?
                .build(),
        )?
        .child(ElementBuilder::new("h3")?.text(&project.title).build())?
        .child(ElementBuilder::new("p")?.class("project-description").text(project.description(lang)).build())?
        .child(tags)?
        .child(
            ElementBuilder::new("span")?
                .class("project-updated")
                .text(&format!("{} {}", t("updated", lang), project.updated_label(lang)))
                .build(),
        )?
        .build();

    let projects = state.projects.clone();
    let id = project.id;
    on_click(&card, move |_e| {
        projects.borrow_mut().select(id);
        crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::ProjectDetail));
    })?;

    Ok(card)
}

fn render_tags(project: &Project) -> Result<Element, JsValue> {
    let tags = ElementBuilder::new("ul")?.class("project-tags").build();
    for tech in &project.tech {
        let tag = ElementBuilder::new("li")?.class("project-tag").text(tech).build();
        tags.append_child(&tag)?;
    }
    Ok(tags)
}

/// Modal de detalle del proyecto seleccionado (vacío si no hay selección)
pub fn render_project_detail(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.preferences.language();
    let vm = state.projects.borrow();

    let Some(project) = vm.selected_project() else {
        return Ok(ElementBuilder::new("div")?.class("project-detail-empty").build());
    };

    let close_btn = ElementBuilder::new("button")?
        .class("btn-close-detail")
        .attr("type", "button")?
        .attr("aria-label", &t("close", lang))?
        .text("✕")
        .build();

    let link = ElementBuilder::new("a")?
        .class("project-link")
        .attr("href", &project.link)?
        .attr("target", "_blank")?
        .attr("rel", "noopener noreferrer")?
        .text(&t("viewSource", lang))
        .build();

    let content = ElementBuilder::new("div")?
        .class("modal-content project-detail")
        .child(close_btn.clone())?
        .child(
            ElementBuilder::new("img")?
                .class("project-detail-image")
                .attr("src", &project.image)?
                .attr("alt", &project.title)?
                .build(),
        )?
        .child(ElementBuilder::new("h3")?.text(&project.title).build())?
        .child(ElementBuilder::new("p")?.text(project.description(lang)).build())?
        .child(ElementBuilder::new("h4")?.text(&t("technologies", lang)).build())?
        .child(render_tags(project)?)?
        .child(
            ElementBuilder::new("p")?
                .class("project-updated")
                .text(&format!("{} {}", t("updated", lang), project.updated_label(lang)))
                .build(),
        )?
        .child(link)?
        .build();
    on_click(&content, |e| e.stop_propagation())?;

    let overlay = ElementBuilder::new("div")?
        .class("modal-overlay active")
        .attr("role", "dialog")?
        .attr("aria-modal", "true")?
        .child(content)?
        .build();

    for target in [&overlay, &close_btn] {
        let projects = state.projects.clone();
        on_click(target, move |_e| close_project_detail(&projects))?;
    }

    Ok(overlay)
}

/// Cerrar el modal de detalle sin re-render completo
pub fn close_project_detail(projects: &Rc<RefCell<ProjectsViewModel>>) {
    projects.borrow_mut().close_detail();
    crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::ProjectDetail));
}
