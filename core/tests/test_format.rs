use repgraph_core::format::{format_diff_by_name, format_value_by_name};
use repgraph_core::{
    direction, format_diff, format_value, progress_bar_height, Direction, MetricData, MetricLabel,
    WeightUnit,
};

#[test]
fn values_get_label_specific_units() {
    use MetricLabel::*;
    let kg = WeightUnit::Kg;

    assert_eq!(format_value(11.3, WeightPerRep, kg), "11.3kg");
    assert_eq!(format_value(10.0, WeightPerRep, WeightUnit::Lbs), "10lbs");
    assert_eq!(format_value(150.0, TotalDuration, kg), "2:30");
    assert_eq!(format_value(75.5, AvgDurationPerSet, kg), "75.5s");
    assert_eq!(format_value(933.4, TotalDistance, kg), "933m");
    assert_eq!(format_value(311.5, AvgDistancePerSet, kg), "312m");
    assert_eq!(format_value(1000.0, Volume, WeightUnit::Lbs), "1000lbs");
    assert_eq!(format_value(3.0, Sets, kg), "3");
    assert_eq!(format_value(24.0, Reps, kg), "24");
}

#[test]
fn durations_under_a_minute_and_odd_seconds() {
    assert_eq!(format_value(45.0, MetricLabel::TotalDuration, WeightUnit::Kg), "0:45");
    assert_eq!(format_value(605.0, MetricLabel::TotalDuration, WeightUnit::Kg), "10:05");
    assert_eq!(format_value(61.4, MetricLabel::TotalDuration, WeightUnit::Kg), "1:01");
}

#[test]
fn diffs_drop_the_sign() {
    assert_eq!(format_diff(-280.0, MetricLabel::Volume, WeightUnit::Kg), "280kg");
    assert_eq!(format_diff(280.0, MetricLabel::Volume, WeightUnit::Kg), "280kg");
    assert_eq!(format_diff(-2.0, MetricLabel::Sets, WeightUnit::Kg), "2");
    assert_eq!(format_diff(-1.3, MetricLabel::WeightPerRep, WeightUnit::Lbs), "1.3lbs");
    assert_eq!(format_diff(-90.0, MetricLabel::TotalDuration, WeightUnit::Kg), "1:30");
    assert_eq!(format_diff(-67.0, MetricLabel::TotalDistance, WeightUnit::Kg), "67m");
    assert_eq!(format_diff(0.0, MetricLabel::Reps, WeightUnit::Kg), "0");
}

#[test]
fn labels_by_name_fall_back_to_plain_numbers() {
    assert_eq!(format_value_by_name(150.0, "Total Duration", WeightUnit::Kg), "2:30");
    assert_eq!(format_diff_by_name(-280.0, "volume", WeightUnit::Kg), "280kg");
    assert_eq!(format_value_by_name(12.6, "cadence", WeightUnit::Kg), "13");
}

#[test]
fn direction_is_the_sign_of_diff() {
    let up = MetricData::compare(MetricLabel::Reps, 10.0, 8.0);
    let down = MetricData::compare(MetricLabel::TotalDuration, 40.0, 50.0);
    let flat = MetricData::compare(MetricLabel::Sets, 3.0, 3.0);

    assert_eq!(direction(&up), Direction::Improvement);
    // shorter is still a decline: higher counts as better for every label
    assert_eq!(direction(&down), Direction::Decline);
    assert_eq!(direction(&flat), Direction::Neutral);
    assert_eq!(Direction::Improvement.arrow(), "↑");
}

#[test]
fn bar_height_is_clamped_share_of_previous() {
    let half = MetricData::compare(MetricLabel::Volume, 360.0, 720.0);
    assert_eq!(progress_bar_height(&half), 50.0);

    let over = MetricData::compare(MetricLabel::Volume, 1000.0, 720.0);
    assert_eq!(progress_bar_height(&over), 100.0);

    let tiny = MetricData::compare(MetricLabel::Reps, 1.0, 100.0);
    assert_eq!(progress_bar_height(&tiny), 5.0);

    let no_previous = MetricData::compare(MetricLabel::Reps, 10.0, 0.0);
    assert_eq!(progress_bar_height(&no_previous), 100.0);
}
