//! Domain-level command types
//! These structs are used by services inside the domain layer; the UI
//! layer builds them from widget state and hands them to the service.

pub mod prorata {
    use shared::CalculationKind;

    /// Input for changing the selected year/month pair.
    #[derive(Debug, Clone)]
    pub struct UpdateSelectedMonthCommand {
        pub year: String,
        pub month: String,
    }

    /// Input for running a prorata days-off calculation.
    #[derive(Debug, Clone)]
    pub struct CalculateDaysOffCommand {
        pub kind: CalculationKind,
    }
}
