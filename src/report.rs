use crate::dispatch::{DispatchError, read_package};
use crate::input::Package;
use crate::message::InfoMessage;

/// What to do with a package that cannot be turned into a workout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OnInvalid {
    /// Log the error and continue with the next package.
    #[default]
    Skip,
    /// Stop at the first invalid package.
    Abort,
}

/// Dispatch every package in order and collect the summaries.
pub fn summarize(
    packages: &[Package],
    on_invalid: OnInvalid,
) -> Result<Vec<InfoMessage>, DispatchError> {
    let mut out = Vec::with_capacity(packages.len());

    for (i, p) in packages.iter().enumerate() {
        match read_package(&p.code, &p.data) {
            Ok(training) => out.push(training.show_training_info()),
            Err(e) if on_invalid == OnInvalid::Skip => {
                tracing::error!(index = i, code = %p.code, err = %e, "skipping package");
            }
            Err(e) => return Err(e),
        }
    }

    tracing::debug!(
        packages = packages.len(),
        summaries = out.len(),
        "summarize done"
    );
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::sample_packages;

    #[test]
    fn samples_render_in_input_order() {
        let lines: Vec<String> = summarize(&sample_packages(), OnInvalid::Skip)
            .unwrap()
            .iter()
            .map(InfoMessage::get_message)
            .collect();

        assert_eq!(
            lines,
            [
                "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; \
                 Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000.",
                "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
                 Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750.",
                "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; \
                 Ср. скорость: 5.850 км/ч; Потрачено ккал: 157.500.",
            ]
        );
    }

    #[test]
    fn skip_drops_only_invalid_package() {
        let packages = vec![
            Package::new("RUN", &[15000.0, 1.0, 75.0]),
            Package::new("XYZ", &[1.0, 1.0, 1.0]),
            Package::new("WLK", &[9000.0, 1.0, 75.0, 180.0]),
        ];
        let out = summarize(&packages, OnInvalid::Skip).unwrap();
        let kinds: Vec<_> = out.iter().map(|m| m.training_type.as_str()).collect();
        assert_eq!(kinds, ["Running", "SportsWalking"]);
    }

    #[test]
    fn abort_returns_first_error() {
        let packages = vec![
            Package::new("RUN", &[15000.0, 1.0, 75.0]),
            Package::new("XYZ", &[1.0, 1.0, 1.0]),
            Package::new("RUN", &[1.0]),
        ];
        let err = summarize(&packages, OnInvalid::Abort).unwrap_err();
        assert!(matches!(err, DispatchError::UnknownCode { ref code, .. } if code == "XYZ"));
    }

    #[test]
    fn empty_batch_is_empty() {
        assert!(summarize(&[], OnInvalid::Abort).unwrap().is_empty());
    }
}
