use eframe::egui;
use log::info;

use shared::CalculationKind;

use crate::backend::domain::calendar::MONTH_NAMES;
use crate::backend::domain::commands::prorata::{
    CalculateDaysOffCommand, UpdateSelectedMonthCommand,
};
use crate::ui::app_state::ProrataCalculatorApp;

impl eframe::App for ProrataCalculatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_header(ui);

            ui.separator();
            ui.add_space(10.0);

            self.render_form(ui);

            ui.add_space(15.0);

            self.render_action_buttons(ui);

            ui.add_space(10.0);

            self.render_messages(ui);
            self.render_results(ui);
        });
    }
}

impl ProrataCalculatorApp {
    /// Render the header
    fn render_header(&self, ui: &mut egui::Ui) {
        ui.label(
            egui::RichText::new("🗓 Prorata Days Off Calculator")
                .font(egui::FontId::new(26.0, egui::FontFamily::Proportional))
                .strong(),
        );
    }

    /// Render the input form
    fn render_form(&mut self, ui: &mut egui::Ui) {
        // Deferred change flags so the handlers run after the widget
        // borrows end
        let mut selected_month_changed = false;
        let mut days_per_week_changed = false;
        let mut start_date_changed = false;
        let mut end_date_changed = false;

        ui.vertical(|ui| {
            if render_form_field(ui, "Year:", &mut self.year, "e.g. 2025").changed() {
                selected_month_changed = true;
            }

            ui.add_space(10.0);

            render_field_label(ui, "Month:");
            egui::ComboBox::from_label("")
                .width(220.0)
                .selected_text(self.month.clone())
                .show_ui(ui, |ui| {
                    for name in MONTH_NAMES {
                        if ui
                            .selectable_value(&mut self.month, name.to_string(), name)
                            .changed()
                        {
                            selected_month_changed = true;
                        }
                    }
                });

            ui.add_space(10.0);

            if render_form_field(ui, "Working Days per Week:", &mut self.days_per_week, "1-7")
                .changed()
            {
                days_per_week_changed = true;
            }

            ui.add_space(10.0);

            if render_form_field(
                ui,
                "Start Date (for New Joins):",
                &mut self.start_date,
                "YYYY-MM-DD",
            )
            .changed()
            {
                start_date_changed = true;
            }

            ui.add_space(10.0);

            if render_form_field(
                ui,
                "End Date (for Terminations):",
                &mut self.end_date,
                "YYYY-MM-DD",
            )
            .changed()
            {
                end_date_changed = true;
            }
        });

        if selected_month_changed {
            self.on_selected_month_changed();
        }
        if days_per_week_changed {
            self.on_days_per_week_changed();
        }
        if start_date_changed {
            self.backend.prorata_service.update_start_date(&self.start_date);
        }
        if end_date_changed {
            self.backend.prorata_service.update_end_date(&self.end_date);
        }
    }

    /// Render the two calculation buttons
    fn render_action_buttons(&mut self, ui: &mut egui::Ui) {
        let mut calculate_join = false;
        let mut calculate_termination = false;

        ui.horizontal(|ui| {
            if ui
                .add_sized(
                    [220.0, 40.0],
                    egui::Button::new(
                        egui::RichText::new("Calculate for New Joiner")
                            .font(egui::FontId::new(15.0, egui::FontFamily::Proportional)),
                    ),
                )
                .clicked()
            {
                calculate_join = true;
            }

            ui.add_space(10.0);

            if ui
                .add_sized(
                    [220.0, 40.0],
                    egui::Button::new(
                        egui::RichText::new("Calculate for Termination")
                            .font(egui::FontId::new(15.0, egui::FontFamily::Proportional)),
                    ),
                )
                .clicked()
            {
                calculate_termination = true;
            }
        });

        if calculate_join {
            self.run_calculation(CalculationKind::NewJoiner);
        }
        if calculate_termination {
            self.run_calculation(CalculationKind::Termination);
        }
    }

    /// Render the validation message line
    fn render_messages(&self, ui: &mut egui::Ui) {
        if let Some(error) = &self.error_message {
            ui.colored_label(egui::Color32::RED, format!("❌ {}", error));
            ui.add_space(5.0);
        }
    }

    /// Render the results, hidden until the first calculation fires
    fn render_results(&self, ui: &mut egui::Ui) {
        let Some(calculation) = &self.calculation else {
            return;
        };

        ui.group(|ui| {
            ui.label(
                egui::RichText::new(format!("Days Worked: {} days", calculation.days_worked))
                    .font(egui::FontId::new(16.0, egui::FontFamily::Proportional)),
            );
        });

        ui.add_space(5.0);

        ui.group(|ui| {
            ui.vertical(|ui| {
                ui.label(
                    egui::RichText::new(format!(
                        "Prorata Days Off: {:.2} days",
                        calculation.prorata_days_off
                    ))
                    .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
                    .strong()
                    .color(egui::Color32::from_rgb(46, 125, 50)),
                );
                ui.label(
                    egui::RichText::new(format!("Formula: {}", calculation.formula))
                        .font(egui::FontId::new(13.0, egui::FontFamily::Proportional))
                        .color(egui::Color32::from_rgb(120, 120, 120)),
                );
            });
        });
    }

    /// Push the edited year/month pair into the domain service and
    /// pick up the re-derived date fields
    fn on_selected_month_changed(&mut self) {
        let command = UpdateSelectedMonthCommand {
            year: self.year.clone(),
            month: self.month.clone(),
        };

        match self.backend.prorata_service.update_selected_month(command) {
            Ok(form) => {
                self.start_date = form.start_date;
                self.end_date = form.end_date;
            }
            Err(e) => {
                self.error_message = Some(format!("Failed to save preferences: {}", e));
            }
        }
    }

    fn on_days_per_week_changed(&mut self) {
        if let Err(e) = self.backend.prorata_service.update_days_per_week(&self.days_per_week) {
            self.error_message = Some(format!("Failed to save preferences: {}", e));
        }
    }

    /// Run one of the two calculation actions. A failed calculation
    /// surfaces its message and leaves the previous results on screen.
    fn run_calculation(&mut self, kind: CalculationKind) {
        info!("📊 Calculate pressed: {}", kind);

        match self
            .backend
            .prorata_service
            .calculate_days_off(CalculateDaysOffCommand { kind })
        {
            Ok(calculation) => {
                self.calculation = Some(calculation);
                self.error_message = None;
            }
            Err(e) => {
                self.error_message = Some(e.to_string());
            }
        }
    }
}

/// Render a bold field label
fn render_field_label(ui: &mut egui::Ui, label: &str) {
    ui.label(
        egui::RichText::new(label)
            .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
            .strong()
            .color(egui::Color32::from_rgb(60, 60, 60)),
    );
    ui.add_space(3.0);
}

/// Render a labeled single-line text field and return its response
fn render_form_field(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    placeholder: &str,
) -> egui::Response {
    ui.vertical(|ui| {
        render_field_label(ui, label);

        ui.add(
            egui::TextEdit::singleline(value)
                .hint_text(placeholder)
                .desired_width(220.0),
        )
    })
    .inner
}
