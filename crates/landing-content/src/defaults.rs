//! Bundled DhanKanya copy

use rust_decimal_macros::dec;

use crate::model::{
    ButtonVariant, Faq, Highlight, LandingContent, NavLink, PlanFeature, Price, PricingTier, Step,
    Suggestion,
};

fn nav(name: &str, link: &str) -> NavLink {
    NavLink {
        name: name.into(),
        link: link.into(),
    }
}

fn suggestion(icon: &str, text: &str) -> Suggestion {
    Suggestion {
        icon: icon.into(),
        text: text.into(),
    }
}

fn step(number: &str, title: &str, description: &str) -> Step {
    Step {
        number: number.into(),
        title: title.into(),
        description: description.into(),
    }
}

fn highlight(icon: &str, title: &str, description: &str) -> Highlight {
    Highlight {
        icon: icon.into(),
        title: title.into(),
        description: description.into(),
    }
}

fn feature(text: &str, included: bool) -> PlanFeature {
    PlanFeature {
        text: text.into(),
        included,
    }
}

fn faq(question: &str, answer: &str) -> Faq {
    Faq {
        id: None,
        question: question.into(),
        answer: answer.into(),
    }
}

impl Default for LandingContent {
    fn default() -> Self {
        Self {
            brand: "DhanKanya".into(),
            headline: "Decisions made smarter with AI assistance.".into(),
            hero_badge: "Smart Budget Planning".into(),
            input_placeholder: "Ask, learn, plan and grow your wealth...".into(),
            nav: vec![
                nav("Home", "#home"),
                nav("Features", "#features"),
                nav("Pricing", "#pricing"),
                nav("FAQ", "#faq"),
                nav("Contact", "#contact"),
            ],
            suggestions: vec![
                suggestion("wallet", "Monthly Budget"),
                suggestion("target", "Saving Goals"),
                suggestion("trending-up", "Mutual Funds"),
                suggestion("credit-card", "Debt Management"),
                suggestion("shield", "Insurance Check"),
            ],
            steps: vec![
                step(
                    "01",
                    "Tell us your story",
                    "Share your income, expenses, and financial goals. We keep it simple and private.",
                ),
                step(
                    "02",
                    "Chat and learn",
                    "Ask DhanKanya anything about money. No financial jargon, just clear, actionable answers.",
                ),
                step(
                    "03",
                    "Plan and grow",
                    "Get personalized budgets, savings strategies, and reminders to stay on track.",
                ),
            ],
            use_cases: vec![
                highlight(
                    "wallet",
                    "Monthly Budget Builder",
                    "Create a realistic budget for your month in under 2 minutes.",
                ),
                highlight(
                    "target",
                    "Savings Goal Planner",
                    "Plan for a vacation, new laptop, or emergency fund with clear milestones.",
                ),
                highlight(
                    "trending-up",
                    "Investment Basics",
                    "Understand mutual funds, SIPs, and stocks without overwhelming finance terms.",
                ),
                highlight(
                    "pie-chart",
                    "Expense Tracker Insights",
                    "Analyze your spending patterns and find areas to save.",
                ),
                highlight(
                    "credit-card",
                    "Debt Payoff Strategy",
                    "Build a plan to pay off loans or credit card debt faster.",
                ),
            ],
            features: vec![
                highlight(
                    "brain",
                    "AI-Powered insights",
                    "Personalized recommendations based on your habits and goals.",
                ),
                highlight(
                    "message-circle",
                    "Chat-first experience",
                    "Talk to DhanKanya like a friend, not a robot. No financial jargon.",
                ),
                highlight(
                    "indian-rupee",
                    "Indian context",
                    "Built for Indian salaries, taxes, and financial products.",
                ),
                highlight(
                    "shield",
                    "Privacy-focused",
                    "Your data is encrypted. We never sell or share your information.",
                ),
            ],
            pricing: vec![
                PricingTier {
                    name: "Starter".into(),
                    price: Price::monthly(dec!(0), "₹"),
                    badge: "Free".into(),
                    description: "Perfect to get started".into(),
                    features: vec![
                        feature("Unlimited basic chat", true),
                        feature("Simple budget templates", true),
                        feature("Monthly reports", true),
                        feature("Advanced planning tools", false),
                    ],
                    button_text: "Get started".into(),
                    button_variant: ButtonVariant::Outline,
                    highlighted: false,
                },
                PricingTier {
                    name: "Pro".into(),
                    price: Price::monthly(dec!(199), "₹"),
                    badge: "Coming".into(),
                    description: "For serious savers and planners".into(),
                    features: vec![
                        feature("All Starter features", true),
                        feature("Advanced insights and forecasting", true),
                        feature("Investment recommendations", true),
                        feature("Data export (CSV/PDF)", true),
                        feature("Priority support", true),
                    ],
                    button_text: "Notify me".into(),
                    button_variant: ButtonVariant::Default,
                    highlighted: true,
                },
            ],
            faqs: vec![
                faq(
                    "Is DhanKanya a registered financial advisor?",
                    "No. DhanKanya is an educational tool designed to help you understand personal finance concepts and plan budgets. It's not a substitute for professional financial or investment advice. Always consult a registered advisor for major financial decisions.",
                ),
                faq(
                    "What data do I need to share?",
                    "You can start with just your monthly income and a rough expense estimate. The more details you share (savings goals, investments, debt), the better our recommendations. You control what you share.",
                ),
                faq(
                    "Can I use DhanKanya without connecting my bank account?",
                    "Yes! You can use DhanKanya without ever sharing bank login details. You can manually enter your income and expenses, or connect (when available) for auto-sync with proper security protocols.",
                ),
                faq(
                    "Will DhanKanya support regional languages?",
                    "Yes, we're planning support for Hindi, Tamil, Telugu, Kannada, and other Indian languages in the coming months.",
                ),
                faq(
                    "Is DhanKanya free?",
                    "The Starter plan is completely free. We're working on a Pro tier with advanced features. Early adopters will always have great pricing.",
                ),
                faq(
                    "How is my data secured?",
                    "Your data is encrypted in transit and at rest. We follow financial industry security standards. You can delete your account and all data anytime.",
                ),
            ],
        }
    }
}
