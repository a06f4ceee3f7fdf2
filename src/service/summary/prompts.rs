//! Prompt for the court-practice narrative

use crate::model::analysis::{DecisionGroups, Statistics};

/// Instructions appended after the case data
pub const ANALYSIS_INSTRUCTIONS: &str = r#"Обрати внимание на следующие аспекты:
1. Определи основную практику принятия решений.
2. Найди все случаи, где решение отличается от основной практики.
3. Проанализируй факторы, которые могли повлиять на отклонение от основной практики.
4. Оцени, насколько обоснованы эти отклонения с юридической точки зрения.
5. Предложи возможные объяснения для отклонений.

Представь свой анализ в структурированном виде, выделяя основные выводы и наблюдения."#;

/// Build the analysis prompt from grouped decisions and outcome counts
pub fn build_analysis_prompt(
    groups: &DecisionGroups,
    statistics: &Statistics,
) -> Result<String, serde_json::Error> {
    let groups_json = serde_json::to_string_pretty(groups)?;
    let statistics_json = serde_json::to_string_pretty(statistics)?;

    Ok(format!(
        "Проанализируй следующие судебные решения и найди отклонения от основной практики:\n\n\
         {groups_json}\n\n\
         Статистика по делам:\n\
         {statistics_json}\n\n\
         {ANALYSIS_INSTRUCTIONS}"
    ))
}
