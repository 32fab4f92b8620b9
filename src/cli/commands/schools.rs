use crate::cli::commands::load_schedules;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Schools { search } = cmd {
        let book = load_schedules(cfg)?;

        let names: Vec<&str> = match search {
            Some(q) => book.search(q),
            None => book.names().collect(),
        };

        if names.is_empty() {
            warning("No schools found.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("School"),
            Column::new("Begin"),
            Column::new("Recess"),
            Column::new("Lunch"),
            Column::new("Dismiss"),
        ]);

        for name in &names {
            if let Some(s) = book.get(name) {
                table.add_row(vec![
                    name.to_string(),
                    s.begin.clone(),
                    format!("{}-{}", s.rec_start, s.rec_end),
                    format!("{}-{}", s.lunch_start, s.lunch_end),
                    s.dismiss.clone(),
                ]);
            }
        }

        print!("{}", table.render());
        info(format!("{} of {} schools", names.len(), book.len()));
    }

    Ok(())
}
