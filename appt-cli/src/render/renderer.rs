use super::theme::OneDark;
use appt_core::Appointment;
use std::fmt::Write;
use termimad::{MadSkin, crossterm::style::Stylize};

#[derive(Clone)]
pub struct RenderOptions {
    pub datetime_format: String,
    pub use_color: bool,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(opts: RenderOptions) -> Self {
        Self {
            skin: OneDark::skin(),
            opts,
        }
    }

    pub fn print_md(&self, md: &str) {
        self.skin.print_text(md);
    }

    pub fn print_info(&self, message: &str) {
        if self.opts.use_color {
            self.print_md(&format!("|-|\n| {message} |\n|-|\n"));
        } else {
            println!("{message}");
        }
    }

    pub fn print_error(&self, message: &str) {
        if self.opts.use_color {
            eprintln!("{}", message.with(OneDark::RED));
        } else {
            eprintln!("{message}");
        }
    }

    pub fn print_appointments(&self, appointments: &[&Appointment]) {
        if appointments.is_empty() {
            self.print_info("No appointments found.");
            return;
        }
        for (i, appointment) in appointments.iter().enumerate() {
            println!("{}", self.appointment_line(i + 1, appointment));
        }
    }

    /// `1. Fri, 15 Aug 2025 10:00 - buyer: Alice, seller: Bob`
    fn appointment_line(&self, index: usize, appointment: &Appointment) -> String {
        let mut datetime = self.format_datetime(appointment);
        let mut buyer = appointment.buyer.clone();
        let mut seller = appointment.seller.clone();
        if self.opts.use_color {
            datetime = datetime.with(OneDark::CYAN).to_string();
            buyer = buyer.with(OneDark::YELLOW).to_string();
            seller = seller.with(OneDark::GREEN).to_string();
        }
        format!("{index}. {datetime} - buyer: {buyer}, seller: {seller}")
    }

    /// Falls back to ISO 8601 when the configured format cannot be rendered.
    fn format_datetime(&self, appointment: &Appointment) -> String {
        let mut out = String::new();
        match write!(out, "{}", appointment.datetime.format(&self.opts.datetime_format)) {
            Ok(()) => out,
            Err(_) => appointment.datetime.to_string(),
        }
    }
}
