use crate::cli::parser::{Commands, WidgetAction};
use crate::config::Config;
use crate::core::layout::WidgetLayout;
use crate::errors::AppResult;
use crate::models::widget::WidgetPatch;
use crate::storage::pool::DbPool;
use crate::ui::messages::{info, success};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Widget { action } = cmd {
        let pool = DbPool::open_migrated(&cfg.database)?;
        let mut store = pool.store();
        let mut layout = WidgetLayout::initialize(&mut store);

        match action {
            WidgetAction::List { all } => {
                let widgets = if *all {
                    layout.list_all()
                } else {
                    layout.list_enabled()
                };

                if widgets.is_empty() {
                    info("No enabled widgets (use `widget list --all`).");
                    return Ok(());
                }

                let mut table = Table::new(vec![
                    Column::new("Pos"),
                    Column::new("Id"),
                    Column::new("Title"),
                    Column::new("Size"),
                    Column::new("On"),
                ]);
                for w in &widgets {
                    table.add_row(vec![
                        w.position.to_string(),
                        w.id.clone(),
                        w.title.clone(),
                        w.size.as_str().to_string(),
                        if w.enabled { "✔" } else { "✘" }.to_string(),
                    ]);
                }
                print!("{}", table.render());
            }

            WidgetAction::Toggle { id } => {
                let enabled = layout.toggle_widget(id)?;
                success(format!(
                    "Widget '{}' {}",
                    id,
                    if enabled { "enabled" } else { "disabled" }
                ));
            }

            WidgetAction::Enable { id } | WidgetAction::Disable { id } => {
                let enabled = matches!(action, WidgetAction::Enable { .. });
                layout.update_widget(
                    id,
                    WidgetPatch {
                        enabled: Some(enabled),
                        ..WidgetPatch::default()
                    },
                )?;
                success(format!(
                    "Widget '{}' {}",
                    id,
                    if enabled { "enabled" } else { "disabled" }
                ));
            }

            WidgetAction::Move { id, position } => {
                layout.reorder_widget(id, *position)?;
                success(format!("Widget '{}' moved to position {}", id, position));
            }

            WidgetAction::Update { id, title, size } => {
                if title.is_none() && size.is_none() {
                    info("Nothing to update (use --title or --size).");
                    return Ok(());
                }
                layout.update_widget(
                    id,
                    WidgetPatch {
                        title: title.clone(),
                        size: *size,
                        ..WidgetPatch::default()
                    },
                )?;
                success(format!("Widget '{}' updated", id));
            }

            WidgetAction::Reset => {
                layout.reset_to_defaults();
                success("Widget layout restored to defaults");
            }
        }
    }

    Ok(())
}
