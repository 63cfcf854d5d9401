use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// One phase of the fixed learning track.
#[derive(Debug, Clone, Serialize)]
pub struct SyllabusPhase {
    pub phase: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
    pub topics: &'static [&'static str],
}

pub fn phases() -> &'static [SyllabusPhase] {
    SYLLABUS
}

/// Quote of the day, rotating through the pool by day-of-year so every
/// request on the same day sees the same line.
pub fn daily_quote(date: NaiveDate) -> &'static str {
    QUOTES[date.ordinal0() as usize % QUOTES.len()]
}

const QUOTES: [&str; 8] = [
    "The expert in anything was once a beginner who refused to give up.",
    "Code is like humor. When you have to explain it, it's bad.",
    "The best time to plant a tree was 20 years ago. The second best time is now.",
    "AI is the new electricity. It will transform every industry.",
    "Learning never exhausts the mind. - Leonardo da Vinci",
    "The only way to do great work is to love what you do. - Steve Jobs",
    "In the middle of difficulty lies opportunity. - Albert Einstein",
    "Success is not final, failure is not fatal: it is the courage to continue that counts.",
];

const SYLLABUS: &[SyllabusPhase] = &[
    SyllabusPhase {
        phase: "Phase 1: Programming Foundations",
        duration: "3-4 months",
        description: "Build your programming fundamentals",
        topics: &[
            "Variables, Data Types & Control Structures",
            "Functions & Scope",
            "Object-Oriented Programming",
            "Error Handling & Debugging",
            "File I/O & Data Processing",
            "Version Control with Git",
            "Testing & Code Quality",
            "Command Line & Development Tools",
        ],
    },
    SyllabusPhase {
        phase: "Phase 2: Data Structures & Algorithms",
        duration: "4-5 months",
        description: "Master the core of computer science",
        topics: &[
            "Arrays, Lists & Strings",
            "Stacks, Queues & Hash Tables",
            "Trees & Binary Search Trees",
            "Graphs & Graph Algorithms",
            "Sorting & Searching Algorithms",
            "Dynamic Programming",
            "Recursion & Backtracking",
            "Complexity Analysis (Big O)",
        ],
    },
    SyllabusPhase {
        phase: "Phase 3: Web Development",
        duration: "3-4 months",
        description: "Create powerful web applications",
        topics: &[
            "HTML5 & Semantic Markup",
            "CSS3 & Modern Styling",
            "JavaScript ES6+ Features",
            "DOM Manipulation & Events",
            "Asynchronous JavaScript",
            "API Integration & Fetch",
            "Modern Frameworks (React/Vue)",
            "Backend Development (Node.js)",
        ],
    },
    SyllabusPhase {
        phase: "Phase 4: Database & Backend Systems",
        duration: "3-4 months",
        description: "Build scalable backend systems",
        topics: &[
            "SQL & Database Design",
            "NoSQL Databases (MongoDB)",
            "RESTful API Design",
            "Authentication & Security",
            "Microservices Architecture",
            "Containerization (Docker)",
            "Cloud Platforms (AWS/GCP)",
            "Performance Optimization",
        ],
    },
    SyllabusPhase {
        phase: "Phase 5: Mathematics for AI",
        duration: "4-5 months",
        description: "Essential math foundation for AI",
        topics: &[
            "Linear Algebra & Vectors",
            "Calculus & Derivatives",
            "Statistics & Probability",
            "Matrix Operations",
            "Optimization Techniques",
            "Information Theory",
            "Graph Theory",
            "Numerical Methods",
        ],
    },
    SyllabusPhase {
        phase: "Phase 6: Machine Learning Fundamentals",
        duration: "5-6 months",
        description: "Core machine learning concepts",
        topics: &[
            "Supervised vs Unsupervised Learning",
            "Linear & Logistic Regression",
            "Decision Trees & Random Forests",
            "Support Vector Machines",
            "K-Means & Clustering",
            "Cross-Validation & Model Selection",
            "Feature Engineering",
            "Bias-Variance Tradeoff",
        ],
    },
    SyllabusPhase {
        phase: "Phase 7: Deep Learning",
        duration: "6-8 months",
        description: "Neural networks and deep learning",
        topics: &[
            "Neural Network Fundamentals",
            "Backpropagation Algorithm",
            "Convolutional Neural Networks",
            "Recurrent Neural Networks",
            "LSTM & GRU Networks",
            "Autoencoders & GANs",
            "Transfer Learning",
            "PyTorch & TensorFlow",
        ],
    },
    SyllabusPhase {
        phase: "Phase 8: Advanced AI Topics",
        duration: "6-8 months",
        description: "Cutting-edge AI technologies",
        topics: &[
            "Natural Language Processing",
            "Computer Vision",
            "Reinforcement Learning",
            "Transformers & Attention",
            "BERT, GPT & Large Language Models",
            "Diffusion Models",
            "Multi-Modal AI",
            "AI Ethics & Fairness",
        ],
    },
    SyllabusPhase {
        phase: "Phase 9: MLOps & Production",
        duration: "4-5 months",
        description: "Deploy AI systems at scale",
        topics: &[
            "Model Deployment Strategies",
            "CI/CD for Machine Learning",
            "Model Monitoring & Maintenance",
            "A/B Testing for Models",
            "Kubernetes for ML",
            "Feature Stores",
            "Data Pipelines",
            "Model Versioning",
        ],
    },
    SyllabusPhase {
        phase: "Phase 10: Research & Innovation",
        duration: "Ongoing",
        description: "Stay current with latest developments",
        topics: &[
            "Reading Research Papers",
            "Implementing Novel Architectures",
            "Contributing to Open Source",
            "Building Personal Projects",
            "Conference Presentations",
            "Networking & Community",
            "Mentoring Others",
            "Continuous Learning",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syllabus_covers_ten_phases_of_eight_topics() {
        assert_eq!(phases().len(), 10);
        for phase in phases() {
            assert_eq!(phase.topics.len(), 8, "{}", phase.phase);
            assert!(!phase.duration.is_empty());
        }
    }

    #[test]
    fn quote_is_stable_within_a_day_and_rotates() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(daily_quote(day), daily_quote(day));

        let quotes: std::collections::BTreeSet<&str> = (0..QUOTES.len() as u64)
            .map(|offset| daily_quote(day + chrono::Duration::days(offset as i64)))
            .collect();
        assert_eq!(quotes.len(), QUOTES.len());
    }
}
