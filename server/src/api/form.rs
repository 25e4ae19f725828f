use axum::response::Html;

static INDEX_HTML: &str = include_str!("../../static/index.html");

/// Render the input form, with one option per known material.
pub async fn index() -> Html<String> {
    let options = ingredient_density::materials()
        .into_iter()
        .map(|(name, _)| {
            let label = name.replace('_', " ");
            format!("        <option value=\"{name}\">{label}</option>")
        })
        .collect::<Vec<_>>()
        .join("\n");

    Html(INDEX_HTML.replace("{{material_options}}", &options))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_index_lists_materials() {
        let Html(page) = index().await;
        assert!(page.contains(r#"<option value="baking_powder">baking powder</option>"#));
        assert!(page.contains(r#"<option value="water">water</option>"#));
        assert!(!page.contains("{{material_options}}"));
    }
}
