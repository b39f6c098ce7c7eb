use super::GroupSelection;
use crate::Result;
use crate::clients::{Client, User};
use crate::metrics::{Assessment, Unit};
use crate::nutrition::{DailyNutritionLog, NutritionPlan};
use core::fmt::Write;
use owo_colors::OwoColorize;

pub fn generate_clients<W: Write>(clients: &[Client], use_colors: bool, writer: &mut W) -> Result<()> {
    let mut clients: Vec<&Client> = clients.iter().collect();
    clients.sort_by_key(|client| client.id);

    let names: Vec<String> = clients
        .iter()
        .map(|client| {
            client
                .user
                .as_ref()
                .map(User::full_name)
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| "(unknown user)".to_string())
        })
        .collect();

    let id_width = clients.iter().map(|client| client.id.to_string().len()).max().unwrap_or(0);
    let name_width = names.iter().map(|name| name.chars().count()).max().unwrap_or(0);

    for (client, name) in clients.iter().zip(&names) {
        let email = client.user.as_ref().and_then(|user| user.email.as_deref()).unwrap_or("");
        let padded_name = format!("{name:<name_width$}");
        let shown_name = if use_colors { padded_name.bold().to_string() } else { padded_name };

        write!(writer, "{:>id_width$}  {shown_name}  {email}", client.id)?;

        if let Some(due) = client.due {
            write!(writer, "  due {due}")?;
        }

        writeln!(writer)?;
    }

    Ok(())
}

pub fn generate_metrics<W: Write>(groups: &[GroupSelection<'_>], use_colors: bool, writer: &mut W) -> Result<()> {
    for (index, group) in groups.iter().enumerate() {
        if index > 0 {
            writeln!(writer)?;
        }

        if use_colors {
            writeln!(writer, "{}", group.name.bold())?;
        } else {
            writeln!(writer, "{}", group.name)?;
        }

        if group.assessments.is_empty() {
            writeln!(writer, "  (no assessments)")?;
            continue;
        }

        let name_width = group.assessments.iter().map(|a| a.name().chars().count()).max().unwrap_or(0);

        for assessment in &group.assessments {
            writeln!(
                writer,
                "  {:<name_width$} : {}",
                assessment.name(),
                describe_assessment(assessment, use_colors)
            )?;
        }
    }

    Ok(())
}

fn describe_assessment(assessment: &Assessment, use_colors: bool) -> String {
    let count = assessment.samples().len();
    let plural = if count == 1 { "" } else { "s" };

    let Some(latest) = assessment.latest_sample() else {
        return format!("no samples [{}]", assessment.unit());
    };

    let value = format_value(latest.value, assessment.unit());
    let value = if use_colors { value.green().to_string() } else { value };

    format!("{value} on {} ({count} sample{plural})", latest.date.format("%Y-%m-%d"))
}

fn format_value(value: f64, unit: &Unit) -> String {
    match unit {
        Unit::YesNo => (if value > 0.0 { "yes" } else { "no" }).to_string(),
        Unit::Calories => format!("{value:.0} calories"),
        Unit::Kilograms => format!("{value:.1} kg"),
        Unit::Pounds => format!("{value:.1} lb"),
        Unit::Unknown(text) if text.is_empty() => format!("{value}"),
        other => format!("{value} {other}"),
    }
}

pub fn generate_nutrition_plan<W: Write>(plan: &NutritionPlan, use_colors: bool, writer: &mut W) -> Result<()> {
    let title = if plan.description.is_empty() { "Nutrition plan" } else { plan.description.as_str() };

    if use_colors {
        writeln!(writer, "{}", title.bold())?;
    } else {
        writeln!(writer, "{title}")?;
    }

    writeln!(writer, "Threshold: {}", plan.threshold)?;
    writeln!(writer)?;
    writeln!(
        writer,
        "{:<4} {:>8} {:>6} {:>8} {:>5} {:>6}",
        "Day", "Calories", "Carbs", "Protein", "Fat", "Fiber"
    )?;

    for (day, targets) in plan.week() {
        writeln!(
            writer,
            "{:<4} {:>8} {:>6} {:>8} {:>5} {:>6}",
            day.to_string(),
            targets.calories,
            targets.carbs,
            targets.protein,
            targets.fat,
            targets.fiber
        )?;
    }

    Ok(())
}

pub fn generate_nutrition_logs<W: Write>(logs: &[DailyNutritionLog], use_colors: bool, writer: &mut W) -> Result<()> {
    let mut logs: Vec<&DailyNutritionLog> = logs.iter().collect();
    logs.sort_by_key(|log| (log.due, log.id));

    for log in logs {
        let due = log.due.map_or_else(|| "----------".to_string(), |due| due.to_string());

        let calories = format!("{}/{}", log.actual_calories, log.goal_calories);
        let calories = match (use_colors, log.calorie_ratio()) {
            (true, Some(ratio)) if ratio > 1.1 => calories.red().to_string(),
            (true, Some(ratio)) if ratio >= 0.9 => calories.green().to_string(),
            (true, Some(_)) => calories.yellow().to_string(),
            _ => calories,
        };

        write!(
            writer,
            "{due}  calories {calories}  carbs {}/{}  protein {}/{}  fat {}/{}  fiber {}/{}",
            log.actual_carbs,
            log.goal_carbs,
            log.actual_protein,
            log.goal_protein,
            log.actual_fat,
            log.goal_fat,
            log.actual_fiber,
            log.goal_fiber
        )?;

        if !log.notes.is_empty() {
            write!(writer, "  \"{}\"", log.notes)?;
        }

        writeln!(writer)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{AssessmentGroupRecord, AssessmentItemRecord, AssessmentRecord, MetricsResponse, SilentDiagnostics};
    use crate::reports::select_metrics;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn client(id: u64, first_name: Option<&str>) -> Client {
        Client {
            id,
            user: first_name.map(|name| User {
                id: id * 10,
                first_name: Some(name.into()),
                email: Some(format!("{}@example.com", name.to_lowercase())),
                ..User::default()
            }),
            ..Client::default()
        }
    }

    #[test]
    fn test_clients_sorted_and_aligned() {
        let mut c = client(12, Some("Bo"));
        c.due = NaiveDate::from_ymd_opt(2021, 6, 1);
        let clients = vec![c, client(3, Some("Alexandra")), client(7, None)];

        let mut output = String::new();
        generate_clients(&clients, false, &mut output).unwrap();

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], " 3  Alexandra       alexandra@example.com");
        assert_eq!(lines[1], " 7  (unknown user)  ");
        assert_eq!(lines[2], "12  Bo              bo@example.com  due 2021-06-01");
    }

    #[test]
    fn test_clients_align_non_ascii_names() {
        let clients = vec![client(1, Some("Zoë")), client(2, Some("Ana"))];

        let mut output = String::new();
        generate_clients(&clients, false, &mut output).unwrap();

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "1  Zoë  zoë@example.com");
        assert_eq!(lines[1], "2  Ana  ana@example.com");
    }

    #[test]
    fn test_clients_with_colors() {
        let mut output = String::new();
        generate_clients(&[client(1, Some("Ada"))], true, &mut output).unwrap();
        assert!(output.contains("\u{1b}["));
        assert!(output.contains("Ada"));
    }

    #[test]
    fn test_empty_clients() {
        let mut output = String::new();
        generate_clients(&[], false, &mut output).unwrap();
        assert!(output.is_empty());
    }

    #[test]
    fn test_metrics_report() {
        let day = |d| Utc.with_ymd_and_hms(2021, 5, d, 0, 0, 0).unwrap();
        let response = MetricsResponse {
            assessment_groups: vec![
                AssessmentGroupRecord { id: 1, name: "Body".into() },
                AssessmentGroupRecord { id: 2, name: "Empty".into() },
            ],
            assessments: vec![
                AssessmentRecord { id: 10, group_id: 1, name: "Weight".into(), unit: "kilograms".into(), created_by: None },
                AssessmentRecord { id: 11, group_id: 1, name: "Hydrated".into(), unit: "yes/no".into(), created_by: None },
                AssessmentRecord { id: 12, group_id: 1, name: "Pulse".into(), unit: "beats per minute".into(), created_by: None },
            ],
            assessment_items: vec![
                AssessmentItemRecord { id: 100, assessment_id: 10, value: "81".into(), date: day(2) },
                AssessmentItemRecord { id: 101, assessment_id: 10, value: "80.5".into(), date: day(9) },
                AssessmentItemRecord { id: 102, assessment_id: 10, value: "82".into(), date: day(1) },
                AssessmentItemRecord { id: 110, assessment_id: 11, value: "yes".into(), date: day(3) },
            ],
        };
        let metrics = response.resolve(&SilentDiagnostics).unwrap();

        let mut output = String::new();
        generate_metrics(&select_metrics(&metrics, None, None), false, &mut output).unwrap();

        let expected = "\
Body
  Weight   : 80.5 kg on 2021-05-09 (3 samples)
  Hydrated : yes on 2021-05-03 (1 sample)
  Pulse    : no samples [beats per minute]

Empty
  (no assessments)
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_nutrition_plan_report() {
        let plan = NutritionPlan {
            description: "Lean bulk".into(),
            threshold: 5,
            mon_calories: 2500,
            mon_carbs: 300,
            mon_protein: 180,
            mon_fat: 70,
            mon_fiber: 35,
            ..NutritionPlan::default()
        };

        let mut output = String::new();
        generate_nutrition_plan(&plan, false, &mut output).unwrap();

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "Lean bulk");
        assert_eq!(lines[1], "Threshold: 5");
        assert_eq!(lines[3], "Day  Calories  Carbs  Protein   Fat  Fiber");
        assert_eq!(lines[4], "Mon      2500    300      180    70     35");
        assert_eq!(lines[10], "Sun         0      0        0     0      0");
        assert_eq!(lines.len(), 11);
    }

    #[test]
    fn test_nutrition_logs_report() {
        let logs = vec![
            DailyNutritionLog {
                id: 2,
                due: NaiveDate::from_ymd_opt(2021, 5, 4),
                goal_calories: 2000,
                actual_calories: 1900,
                ..DailyNutritionLog::default()
            },
            DailyNutritionLog {
                id: 1,
                due: NaiveDate::from_ymd_opt(2021, 5, 3),
                notes: "travel day".into(),
                ..DailyNutritionLog::default()
            },
        ];

        let mut output = String::new();
        generate_nutrition_logs(&logs, false, &mut output).unwrap();

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines[0],
            "2021-05-03  calories 0/0  carbs 0/0  protein 0/0  fat 0/0  fiber 0/0  \"travel day\""
        );
        assert!(lines[1].starts_with("2021-05-04  calories 1900/2000"));
    }
}
