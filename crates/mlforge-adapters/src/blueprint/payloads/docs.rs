//! Reports and documentation markdown.

use mlforge_core::domain::PayloadContent;

/// Results report skeleton under `reports/`.
pub fn results() -> PayloadContent {
    PayloadContent::Literal("# Results\n\n## Model Performance\n\n## Insights\n")
}

/// Project overview document under `docs/`.
pub fn project_overview() -> PayloadContent {
    PayloadContent::Literal(
        r##"# Project Overview

## Objective
Describe the main goal of your ML project here.

## Dataset
- **Source**:
- **Size**:
- **Features**:
- **Target Variable**:

## Methodology
1. Data Collection
2. Exploratory Data Analysis
3. Feature Engineering
4. Model Selection
5. Training and Evaluation
6. Deployment

## Models Evaluated
- Model 1: Description and performance
- Model 2: Description and performance

## Best Model
- **Algorithm**:
- **Hyperparameters**:
- **Performance Metrics**:

## Future Work
- Improvement 1
- Improvement 2

## References
- Reference 1
- Reference 2
"##,
    )
}
