//! Project-level payloads: README, requirements, packaging, ignore rules,
//! and the YAML configuration.

use mlforge_core::domain::PayloadContent;

/// Top-level README with the directory map and setup instructions.
pub fn readme() -> PayloadContent {
    PayloadContent::Literal(
        r##"# ML Project

## Project Overview
Brief description of the project, objectives, and business problem.

## Project Structure
```
├── data/               # Data directory
│   ├── raw/           # Original, immutable data
│   ├── processed/     # Cleaned, transformed data
│   ├── interim/       # Intermediate transformations
│   └── external/      # Third-party data
├── notebooks/         # Jupyter notebooks for exploration
├── src/               # Source code
│   ├── data/         # Data loading and preprocessing
│   ├── features/     # Feature engineering
│   ├── models/       # Model training and evaluation
│   ├── visualization/ # Visualization utilities
│   └── utils/        # Helper functions
├── models/           # Trained models
├── reports/          # Generated reports and figures
├── tests/            # Unit tests
└── config/           # Configuration files
```

## Setup
```bash
python -m venv venv
source venv/bin/activate  # On Windows: venv\Scripts\activate
pip install -r requirements.txt
```

## Usage
```bash
# Train model
python src/models/train.py

# Make predictions
python src/models/predict.py

# Run tests
pytest tests/
```

## Data
- **Source**: [Data source description]
- **Size**: [Dataset size]
- **Features**: [Number and description of features]

## Model
- **Algorithm**: [Model type]
- **Performance**: [Key metrics]

## Results
See `reports/results.md` for detailed results.

## Contributors
- [Your Name]

## License
MIT License
"##,
    )
}

/// Pinned-minimum Python dependency list.
pub fn requirements() -> PayloadContent {
    PayloadContent::Literal(
        r##"# Core ML libraries
numpy>=1.24.0
pandas>=2.0.0
scikit-learn>=1.3.0
scipy>=1.11.0

# Visualization
matplotlib>=3.7.0
seaborn>=0.12.0
plotly>=5.14.0

# Data processing
joblib>=1.3.0

# Configuration
pyyaml>=6.0
python-dotenv>=1.0.0

# Jupyter
jupyter>=1.0.0
ipykernel>=6.23.0

# Testing
pytest>=7.3.0
pytest-cov>=4.1.0

# Code quality
black>=23.3.0
flake8>=6.0.0
mypy>=1.3.0

# Optional: Deep Learning (uncomment if needed)
# torch>=2.0.0
# tensorflow>=2.12.0

# Optional: Advanced ML (uncomment if needed)
# xgboost>=1.7.0
# lightgbm>=3.3.0
# catboost>=1.2.0
"##,
    )
}

/// Packaging descriptor. The declared package name is the project name —
/// the manifest's single substitution point.
pub fn setup_py() -> PayloadContent {
    PayloadContent::Parameterized(
        r##"from setuptools import find_packages, setup

setup(
    name='{{PROJECT_NAME}}',
    version='0.1.0',
    packages=find_packages(),
    description='Machine Learning Project',
    author='Your Name',
    author_email='your.email@example.com',
    install_requires=[
        'numpy',
        'pandas',
        'scikit-learn',
        'matplotlib',
        'seaborn',
        'pyyaml',
    ],
    python_requires='>=3.8',
)
"##,
    )
}

/// Ignore rules for Python artifacts, data, models, IDEs, and logs.
pub fn gitignore() -> PayloadContent {
    PayloadContent::Literal(
        r##"# Python
__pycache__/
*.py[cod]
*$py.class
*.so
.Python
env/
venv/
ENV/
build/
develop-eggs/
dist/
downloads/
eggs/
.eggs/
lib/
lib64/
parts/
sdist/
var/
wheels/
*.egg-info/
.installed.cfg
*.egg

# Jupyter Notebook
.ipynb_checkpoints
*.ipynb_checkpoints

# Data
data/raw/*
data/processed/*
data/interim/*
data/external/*
!data/raw/.gitkeep
!data/processed/.gitkeep
!data/interim/.gitkeep
!data/external/.gitkeep

# Models
models/*.pkl
models/*.h5
models/*.pt
models/*.pth
*.joblib

# IDE
.vscode/
.idea/
*.swp
*.swo
.DS_Store

# Environment
.env
.envrc

# Logs
logs/
*.log

# Reports
reports/figures/*.png
reports/figures/*.pdf
"##,
    )
}

/// Pipeline configuration: data paths, model type and hyperparameters,
/// training settings, feature lists, output locations.
pub fn config_yaml() -> PayloadContent {
    PayloadContent::Literal(
        r##"# Configuration for ML project

data:
  raw_path: "data/raw"
  processed_path: "data/processed"
  train_test_split: 0.2
  random_state: 42

model:
  type: "random_forest"
  params:
    n_estimators: 100
    max_depth: 10
    random_state: 42

training:
  cv_folds: 5
  scoring: "accuracy"

features:
  numerical: []
  categorical: []
  target: ""

output:
  model_path: "models/model.pkl"
  figures_path: "reports/figures"
"##,
    )
}
