//! Keyword table used by the classifier.
//!
//! Order matters: on equal match counts the earlier category wins.

use super::Category;

pub(super) const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::FrontendDevelopment,
        &[
            "react",
            "vue",
            "angular",
            "javascript",
            "html",
            "css",
            "scss",
            "sass",
            "typescript",
            "bootstrap",
            "tailwind",
            "frontend",
            "ui",
            "ux",
            "design",
            "web design",
            "responsive",
            "jquery",
            "dom",
            "browser",
            "webpack",
            "vite",
        ],
    ),
    (
        Category::BackendDevelopment,
        &[
            "node",
            "express",
            "django",
            "flask",
            "spring",
            "laravel",
            "php",
            "python",
            "java",
            "backend",
            "api",
            "rest",
            "graphql",
            "server",
            "microservices",
            "fastapi",
            "rails",
            "ruby",
            "go",
            "rust",
        ],
    ),
    (
        Category::DatabaseStorage,
        &[
            "mysql",
            "postgresql",
            "mongodb",
            "redis",
            "database",
            "sql",
            "nosql",
            "sqlite",
            "oracle",
            "cassandra",
            "elasticsearch",
            "firebase",
            "supabase",
        ],
    ),
    (
        Category::MobileDevelopment,
        &[
            "react native",
            "flutter",
            "ios",
            "android",
            "mobile",
            "app development",
            "swift",
            "kotlin",
            "xamarin",
            "ionic",
            "cordova",
            "native",
        ],
    ),
    (
        Category::DevOpsCloud,
        &[
            "docker",
            "kubernetes",
            "aws",
            "azure",
            "gcp",
            "jenkins",
            "gitlab",
            "devops",
            "ci/cd",
            "terraform",
            "ansible",
            "cloud",
            "deployment",
            "nginx",
            "apache",
            "linux",
            "unix",
        ],
    ),
    (
        Category::DataScience,
        &[
            "python",
            "pandas",
            "numpy",
            "matplotlib",
            "scikit",
            "tensorflow",
            "pytorch",
            "machine learning",
            "data science",
            "analytics",
            "jupyter",
            "statistics",
            "data analysis",
            "visualization",
            "tableau",
            "power bi",
        ],
    ),
    (
        Category::ProgrammingLanguages,
        &[
            "javascript",
            "python",
            "java",
            "c++",
            "c#",
            "go",
            "rust",
            "php",
            "ruby",
            "swift",
            "kotlin",
            "scala",
            "clojure",
            "haskell",
            "programming",
        ],
    ),
    (
        Category::TestingQuality,
        &[
            "testing",
            "jest",
            "cypress",
            "selenium",
            "junit",
            "pytest",
            "test automation",
            "tdd",
            "bdd",
            "quality assurance",
            "qa",
        ],
    ),
    (
        Category::DesignCreative,
        &[
            "figma",
            "sketch",
            "photoshop",
            "illustrator",
            "design",
            "ui/ux",
            "graphic design",
            "web design",
            "prototyping",
            "wireframe",
            "adobe",
        ],
    ),
    (
        Category::BusinessManagement,
        &[
            "project management",
            "agile",
            "scrum",
            "kanban",
            "leadership",
            "business",
            "marketing",
            "sales",
            "strategy",
            "management",
        ],
    ),
];
