//! Catalog content for the nine phases.

use once_cell::sync::Lazy;

use super::{FormField, PhaseDefinition, ScoringAxis};

const VERY_LOW_TO_HIGH: [&str; 5] = ["Very Low", "Low", "Moderate", "High", "Very High"];
const POOR_TO_PERFECT: [&str; 5] = ["Poor", "Limited", "Good", "Strong", "Perfect"];

/// All planning phases, ordered by id.
pub static PHASES: Lazy<Vec<PhaseDefinition>> = Lazy::new(|| {
    vec![
        discovery(),
        business_case(),
        requirements(),
        technical_design(),
        development(),
        validation(),
        process_feedback(),
        deployment(),
        optimization(),
    ]
});

fn discovery() -> PhaseDefinition {
    PhaseDefinition::new(
        1,
        "Phase 1: Discovery",
        "Ideation",
        "This starting phase focuses on clearly defining the business opportunity, to make sure \
         that all stakeholders are aligned on the objectives and scope. It also includes \
         identifying the data requirements and additional ML models needed to address the \
         business problem.",
    )
    .with_activities(&[
        "Define the business opportunity",
        "Align on objectives and scope",
        "Identify data needs and availability",
        "Evaluate existing models and identify gaps",
    ])
    .with_roles(&["Digital Marketing Manager (Owner)", "Data Scientist (Support)"])
    .with_checklist(&[
        "Has the business opportunity been clearly defined?",
        "Are the stakeholders identified and aligned?",
        "Are the success criteria and KPIs defined?",
    ])
    .with_field(
        FormField::text("useCaseName", "Use case name")
            .placeholder("e.g., Customer Churn Prediction")
            .section("General Information"),
    )
    .with_field(
        FormField::multiline("useCaseExplanation", "Brief explanation of use case", 3)
            .placeholder("Briefly describe what this use case aims to achieve...")
            .section("General Information"),
    )
    .with_field(
        FormField::multiline(
            "businessProblem",
            "What business problem are we solving and for which customer segments?",
            3,
        )
        .placeholder("Describe the specific business problem and target segments...")
        .section("Business Context"),
    )
    .with_field(
        FormField::multiline("successMetrics", "How will we measure success?", 3)
            .placeholder("Define success metrics and KPIs...")
            .section("Business Context"),
    )
    .with_field(
        FormField::multiline("dataAvailability", "What data do we need and is it available?", 3)
            .placeholder("List required data sources and their availability...")
            .section("Data Requirements"),
    )
    .with_field(
        FormField::multiline(
            "modelAssessment",
            "Can we use existing machine learning models as is or do we need to customize them?",
            3,
        )
        .placeholder("Assess existing model capabilities and requirements...")
        .section("Data Requirements"),
    )
    .with_axis(ScoringAxis::new(
        "strategicAlignment",
        "Strategic Alignment",
        "How well it aligns with company strategy",
        POOR_TO_PERFECT,
    ))
    .with_axis(ScoringAxis::new(
        "customerValue",
        "Customer Value",
        "Direct benefit to customers",
        ["Low", "Minor", "Moderate", "High", "Exceptional"],
    ))
    .with_axis(ScoringAxis::new(
        "dataAvailability",
        "Data Availability",
        "Quality and accessibility of required data",
        ["Poor", "Limited", "Average", "Good", "Excellent"],
    ))
    .with_scoring_title("Ideation")
    .with_deliverables(&[
        "Use case definition",
        "Data availability assessment",
        "Success metrics",
        "Go/No-go decision",
    ])
}

fn business_case() -> PhaseDefinition {
    PhaseDefinition::new(
        2,
        "Phase 2: Business Case Assessment",
        "Assessment",
        "This phase validates the business opportunity and ensures there's a strong case for \
         moving forward. The focus is on understanding ROI, resource requirements, and \
         technical feasibility.",
    )
    .with_activities(&[
        "Calculate expected ROI and business value",
        "Assess technical feasibility and resource requirements",
        "Identify marketing and operational resources needed",
        "Evaluate risks and mitigation strategies",
    ])
    .with_roles(&[
        "Product Owner (Owner)",
        "Data Scientist (Support)",
        "Data Engineer (Support)",
        "Finance (Support)",
    ])
    .with_checklist(&[
        "Has the quantified business value and ROI been projected?",
        "Is the feasibility of the business case assessed?",
        "Are the required resources identified and available?",
        "Are the risks and mitigation strategies defined?",
        "Are the timelines and milestones established?",
    ])
    .with_deliverables(&[
        "Business case document",
        "ROI analysis",
        "Resource requirements",
        "Timeline and milestones",
        "Go/no-go decision",
    ])
    .with_field(
        FormField::multiline(
            "businessValueValidation",
            "What is the expected return on investment (ROI) and business value?",
            4,
        )
        .placeholder(
            "Provide specific revenue impact projections, cost savings or efficiency gains...",
        )
        .section("Business Case"),
    )
    .with_field(
        FormField::multiline(
            "technicalFeasibilityAssessment",
            "What technical expertise and resources are required?",
            4,
        )
        .placeholder(
            "Evaluate technical team capabilities, required infrastructure and integration \
             complexity...",
        )
        .section("Resources"),
    )
    .with_field(
        FormField::multiline(
            "marketingOperationalResources",
            "What marketing or operational resources are required?",
            4,
        )
        .placeholder(
            "Evaluate marketing team capacity, operational support and any additional \
             resources needed...",
        )
        .section("Resources"),
    )
    .with_field(
        FormField::multiline(
            "riskAssessment",
            "What are the key risks and mitigation strategies?",
            4,
        )
        .placeholder(
            "Identify potential risks related to data quality, technical feasibility, and \
             operational impact...",
        )
        .section("Risk Management"),
    )
    .with_field(
        FormField::multiline(
            "timelineAndMilestones",
            "What is the estimated timeline and key milestones?",
            3,
        )
        .placeholder(
            "Outline the expected timeline for implementation, including key milestones and \
             deliverables...",
        )
        .section("Timeline"),
    )
    .with_axis(ScoringAxis::new(
        "revenueImpact",
        "Revenue Potential",
        "Expected annual revenue impact",
        ["Minimal", "Low", "Moderate", "High", "Very High"],
    ))
    .with_axis(
        ScoringAxis::new(
            "resourceRequirements",
            "Resource Requirements",
            "Resource requirements to implement this use case",
            VERY_LOW_TO_HIGH,
        )
        .inverse(),
    )
    .with_axis(
        ScoringAxis::new(
            "riskLevel",
            "Risk Level",
            "Level of technical, business and operational risks",
            VERY_LOW_TO_HIGH,
        )
        .inverse(),
    )
    .with_scoring_title("Business Case")
}

fn requirements() -> PhaseDefinition {
    PhaseDefinition::new(
        3,
        "Phase 3: Requirements Gathering",
        "Requirements",
        "This phase focuses on gathering detailed functional and non-functional requirements. \
         The team captures specific system behavior, performance expectations, and constraints \
         to ensure the solution meets all stakeholder needs.",
    )
    .with_activities(&[
        "Gather functional requirements and user stories",
        "Define non-functional requirements on system performance, scalability, and security",
        "Document system constraints and dependencies",
        "Validate requirements with stakeholders",
    ])
    .with_roles(&["Product Owner (Support)"])
    .with_checklist(&[
        "Are all functional requirements clearly documented?",
        "Are non-functional requirements defined with measurable criteria?",
        "Have system constraints and dependencies been identified?",
        "Are requirements validated and approved by stakeholders?",
    ])
    .with_deliverables(&["Requirements document", "Acceptance criteria", "System constraints"])
    .with_field(
        FormField::multiline("functionalRequirements", "What are the functional requirements?", 4)
            .placeholder(
                "Define what the system must do - specific features, user stories, and \
                 business logic...",
            )
            .section("Functional"),
    )
    .with_field(
        FormField::multiline(
            "nonFunctionalRequirements",
            "What are the non-functional requirements?",
            4,
        )
        .placeholder(
            "Define performance, scalability, security, usability, and reliability \
             requirements...",
        )
        .section("Non-Functional"),
    )
    .with_field(
        FormField::multiline(
            "systemConstraints",
            "What are the system constraints & dependencies?",
            3,
        )
        .placeholder(
            "Identify technical constraints, regulatory requirements, and system \
             dependencies...",
        )
        .section("Constraints"),
    )
    .with_field(
        FormField::multiline("acceptanceCriteria", "What are the acceptance criteria?", 3)
            .placeholder("Define measurable criteria for validating that requirements are met...")
            .section("Validation"),
    )
    .with_axis(ScoringAxis::new(
        "requirementsClarity",
        "Requirements Clarity",
        "How well-defined and clear the requirements are",
        ["Vague", "Unclear", "Moderate", "Clear", "Crystal Clear"],
    ))
    .with_axis(ScoringAxis::new(
        "stakeholderAlignment",
        "Stakeholder Alignment",
        "Level of agreement among stakeholders on requirements",
        POOR_TO_PERFECT,
    ))
    .with_axis(
        ScoringAxis::new(
            "requirementsComplexity",
            "Requirements Complexity",
            "Complexity of the requirements",
            VERY_LOW_TO_HIGH,
        )
        .inverse(),
    )
    .with_axis(
        ScoringAxis::new(
            "changeRisk",
            "Requirements Change Risk",
            "Risk of requirements changing during development",
            VERY_LOW_TO_HIGH,
        )
        .inverse(),
    )
    .with_scoring_title("Requirements Gathering")
}

fn technical_design() -> PhaseDefinition {
    PhaseDefinition::new(
        4,
        "Phase 4: Technical Design & Planning",
        "Design",
        "This phase focuses on creating the technical blueprint for the solution. The team \
         designs the architecture, data models, and integration plans needed to build a \
         scalable and maintainable system.",
    )
    .with_activities(&[
        "Design technical architecture",
        "Define data models and schemas",
        "Plan system integration and scalability requirements",
    ])
    .with_roles(&[
        "Data Engineer (Owner)",
        "Data Scientist (Support)",
        "DevOps Engineer (Support)",
        "Product Owner (Validation)",
    ])
    .with_checklist(&[
        "Is the technical architecture fully designed?",
        "Are data models and schemas defined?",
        "Is the system integration plan complete?",
        "Are scalability and performance requirements addressed?",
        "Is the design reviewed and approved by stakeholders?",
    ])
    .with_deliverables(&["Technical architecture", "Implementation plan"])
    .with_field(
        FormField::multiline("architectureDesign", "What is the technical architecture design?", 4)
            .placeholder(
                "Describe the overall technical architecture and system components, including \
                 data flow, infrastructure, and technology stack...",
            )
            .section("Architecture Design"),
    )
    .with_field(
        FormField::multiline("dataModels", "What are the data models and schemas?", 3)
            .placeholder("Define input and output of data...")
            .section("Data Design"),
    )
    .with_axis(
        ScoringAxis::new(
            "technicalComplexity",
            "Technical Complexity",
            "Complexity of the technical implementation",
            VERY_LOW_TO_HIGH,
        )
        .inverse(),
    )
    .with_axis(ScoringAxis::new(
        "scalabilityPotential",
        "Scalability Potential",
        "Ability to expand and grow impact",
        ["Limited", "Small", "Moderate", "High", "Unlimited"],
    ))
    .with_axis(ScoringAxis::new(
        "reusability",
        "Reusability",
        "Potential to reuse components for other use cases",
        ["Single-use", "Limited", "Some", "High", "Universal"],
    ))
    .with_scoring_title("Technical")
}

fn development() -> PhaseDefinition {
    PhaseDefinition::new(
        5,
        "Phase 5: Development",
        "Development",
        "This phase focuses on building the solution according to the technical design and \
         requirements. The development team implements the system components, features, and \
         functionality as specified in earlier phases.",
    )
    .with_activities(&[
        "Develop solution components according to technical specifications",
        "Implement functional requirements and business logic",
        "Build data pipelines and system integrations",
        "Create user interfaces and API endpoints",
    ])
    .with_roles(&[
        "Data Engineer (Owner)",
        "DevOps Engineer (Support)",
        "Product Owner (Validation)",
    ])
    .with_checklist(&[
        "Are all functional and non-functional requirements implemented?",
        "Is the code following established coding standards (testing, documentation, etc.)?",
        "Is basic functionality working as expected when tested?",
    ])
    .with_deliverables(&["Developed solution", "Unit/integration tests", "Documentation"])
    .with_field(
        FormField::multiline(
            "developmentProgress",
            "What is the current development progress?",
            4,
        )
        .placeholder(
            "Describe development progress, completed features, and implementation status \
             against requirements...",
        )
        .section("Development Progress"),
    )
    .with_field(
        FormField::multiline("implementedFeatures", "What features have been implemented?", 4)
            .placeholder(
                "List completed features, functionality, and system components that have been \
                 built...",
            )
            .section("Feature Implementation"),
    )
    .with_field(
        FormField::multiline(
            "technicalChallenges",
            "What technical challenges have been encountered?",
            3,
        )
        .placeholder(
            "Document technical challenges, blockers, and how they were resolved or are being \
             addressed...",
        )
        .section("Technical Challenges"),
    )
    .with_field(
        FormField::multiline("codeQuality", "How is code quality being maintained?", 3)
            .placeholder(
                "Describe code review processes, coding standards compliance, and quality \
                 assurance measures...",
            )
            .section("Code Quality"),
    )
    .with_axis(ScoringAxis::new(
        "implementationProgress",
        "Implementation Progress",
        "Current state of development completion",
        ["Behind", "Delayed", "On Track", "Ahead", "Complete"],
    ))
    .with_axis(ScoringAxis::new(
        "testCoverage",
        "Test Coverage",
        "Extent of unit and integration tests covering the codebase",
        VERY_LOW_TO_HIGH,
    ))
    .with_axis(ScoringAxis::new(
        "codeQuality",
        "Code Quality",
        "Maintainability and quality of developed code",
        ["Poor", "Below Standards", "Acceptable", "Good", "Excellent"],
    ))
    .with_scoring_title("Development")
}

fn validation() -> PhaseDefinition {
    PhaseDefinition::new(
        6,
        "Phase 6: Validation",
        "Validation",
        "This phase validates the solution with real users and data on a controlled testing \
         environment to ensure it meets business requirements.",
    )
    .with_activities(&[
        "Validate solution with real users and scenarios",
        "Run controlled experiments to validate behavior",
        "Gather user feedback and performance metrics",
    ])
    .with_roles(&[
        "Product Owner (Owner)",
        "Digital Marketing Specialist (Support)",
        "Technical Web Analyst (Support)",
        "Data Engineer (Support)",
    ])
    .with_checklist(&[
        "Has the solution been tested with real users?",
        "Are the results of user testing documented?",
    ])
    .with_deliverables(&["Validation results", "Performance metrics", "User feedback"])
    .with_field(
        FormField::multiline("userTesting", "What are the results of user testing?", 4)
            .placeholder("Document user testing sessions, feedback, and iterations...")
            .section("User Validation"),
    )
    .with_field(
        FormField::multiline(
            "performanceValidation",
            "What are the results of performance validation?",
            3,
        )
        .placeholder(
            "Validate system performance under real-world conditions, think of process time \
             and accuracy...",
        )
        .section("Performance Testing"),
    )
    .with_field(
        FormField::multiline(
            "stakeholderFeedback",
            "What feedback have stakeholders provided?",
            3,
        )
        .placeholder("Document stakeholder feedback and approval decisions...")
        .section("Approval Process"),
    )
    .with_axis(ScoringAxis::new(
        "userSatisfaction",
        "User Satisfaction",
        "Satisfaction level of users with the solution",
        VERY_LOW_TO_HIGH,
    ))
    .with_axis(ScoringAxis::new(
        "performanceReliability",
        "Performance Reliability",
        "Reliability of the solution under expected load",
        ["Very Poor", "Poor", "Average", "Good", "Excellent"],
    ))
    .with_axis(
        ScoringAxis::new(
            "feedbackProcessingEffort",
            "Feedback Processing Effort",
            "Effort required to process and implement feedback",
            VERY_LOW_TO_HIGH,
        )
        .inverse(),
    )
    .with_scoring_title("Validation")
}

fn process_feedback() -> PhaseDefinition {
    PhaseDefinition::new(
        7,
        "Phase 7: Process Feedback",
        "Feedback",
        "This phase focuses on processing feedback from the validation phase and validating \
         that the solution meets all requirements and expectations before deployment on \
         production.",
    )
    .with_activities(&[
        "Process feedback from validation phase",
        "Validate improved solution meets all requirements",
        "Obtain final approval from key stakeholders",
        "Update documentation with implementation details",
    ])
    .with_roles(&["Data Engineer (Owner)", "Product Owner (Support)"])
    .with_checklist(&[
        "Has all feedback been processed and addressed?",
        "Does the updated solution still meet all functional and non-functional requirements?",
        "Is the solution ready for deployment?",
    ])
    .with_deliverables(&[
        "Updated solution",
        "Final approval from stakeholders",
        "Deployment readiness assessment",
    ])
    .with_field(
        FormField::multiline("feedbackAnalysis", "What feedback has been addressed?", 4)
            .placeholder("Document feedback addressed based on user feedback...")
            .section("Feedback"),
    )
    .with_field(
        FormField::multiline(
            "requirementsValidation",
            "Have all requirements been validated?",
            3,
        )
        .placeholder(
            "Validate that the solution still meets all functional and non-functional \
             requirements...",
        )
        .section("Requirements Validation"),
    )
    .with_field(
        FormField::multiline(
            "stakeholderSignoff",
            "Do you have final approval from stakeholders?",
            3,
        )
        .placeholder(
            "Document the final approval from key stakeholders, mention names and any \
             additional comments...",
        )
        .section("Approval"),
    )
    .with_field(
        FormField::multiline(
            "lessonsLearned",
            "What lessons have been learned during the development of this solution?",
            3,
        )
        .placeholder("Document lessons learned and recommendations for future implementations...")
        .section("Lessons Learned"),
    )
    .with_axis(ScoringAxis::new(
        "requirementCompliance",
        "Requirements Compliance",
        "How well the solution meets all functional and non-functional requirements",
        ["Poor", "Partial", "Good", "Strong", "Complete"],
    ))
    .with_axis(ScoringAxis::new(
        "deploymentReadiness",
        "Deployment Readiness",
        "How ready the solution is for production deployment",
        ["Not Ready", "Some Issues", "Nearly Ready", "Ready", "Fully Ready"],
    ))
    .with_axis(
        ScoringAxis::new(
            "deploymentRisk",
            "Deployment Risk",
            "Risk associated with deploying the solution to production",
            VERY_LOW_TO_HIGH,
        )
        .inverse(),
    )
    .with_scoring_title("Process Feedback & Validation")
}

fn deployment() -> PhaseDefinition {
    PhaseDefinition::new(
        8,
        "Phase 8: Deployment & Monitoring",
        "Deployment",
        "This phase focuses on deploying the solution to production and monitoring its \
         performance to ensure all works as expected.",
    )
    .with_activities(&[
        "Deploy solution to production environment",
        "Set up monitoring dashboards and alerts",
        "Inform end users about the go-live",
        "Monitor and resolve production issues",
    ])
    .with_roles(&[
        "Data Engineer (Owner)",
        "DevOps Engineer (Support)",
        "Product Owner (Support)",
    ])
    .with_checklist(&[
        "Is the solution successfully deployed to production?",
        "Are monitoring dashboards and alerts configured?",
        "Are users ready to use the solution?",
    ])
    .with_deliverables(&["Deployed solution", "Monitoring dashboard", "Communication plan"])
    .with_field(
        FormField::multiline("deploymentPlan", "What is the deployment strategy?", 4)
            .placeholder("Document deployment strategy, timeline, and rollback procedures...")
            .section("Deployment Strategy"),
    )
    .with_field(
        FormField::multiline("userTraining", "What training is being provided to users?", 3)
            .placeholder(
                "Document training materials if needed and elaborate on user adoption...",
            )
            .section("User Enablement"),
    )
    .with_field(
        FormField::multiline(
            "communicationPlan",
            "How will you communicate changes to stakeholders?",
            3,
        )
        .placeholder(
            "Document communication plan for stakeholders, including go-live announcements \
             and support agreements...",
        )
        .section("Communication Plan"),
    )
    .with_field(
        FormField::multiline("monitoringSetup", "How will you monitor the solution?", 3)
            .placeholder(
                "Establish monitoring processes, alerting mechanisms, rollback procedures...",
            )
            .section("Monitoring"),
    )
    .with_axis(
        ScoringAxis::new(
            "deploymentComplexity",
            "Deployment Complexity",
            "Complexity of the deployment process",
            ["Very Simple", "Simple", "Moderate", "Complex", "Very Complex"],
        )
        .inverse(),
    )
    .with_axis(ScoringAxis::new(
        "monitoringReadiness",
        "Monitoring Readiness",
        "Quality and completeness of monitoring setup",
        ["Poor", "Limited", "Adequate", "Good", "Excellent"],
    ))
    .with_axis(ScoringAxis::new(
        "userReadiness",
        "User Readiness",
        "How prepared users are for the new solution",
        ["Not Ready", "Limited", "Somewhat Ready", "Ready", "Fully Prepared"],
    ))
    .with_axis(
        ScoringAxis::new(
            "deploymentRisk",
            "Deployment Risk",
            "Risk level of the deployment process",
            VERY_LOW_TO_HIGH,
        )
        .inverse(),
    )
    .with_scoring_title("Deployment & Monitoring")
}

fn optimization() -> PhaseDefinition {
    PhaseDefinition::new(
        9,
        "Phase 9: Optimization & Iteration",
        "Optimization",
        "This phase focuses on continuous improvement of the solution based on production data \
         and user feedback.",
    )
    .with_activities(&[
        "Optimize system performance and efficiency",
        "Add new features based on user feedback",
        "Refine model parameters based on production data",
        "Improve operational processes and workflows",
    ])
    .with_roles(&["Product Manager (Owner)", "Data Scientist (Support)"])
    .with_checklist(&[
        "Are optimization opportunities identified and prioritized?",
        "Are new features delivering expected value?",
        "Is model performance improving over time?",
        "Are operational processes efficient?",
        "Is continuous improvement cycle established?",
    ])
    .with_field(
        FormField::multiline("optimizations", "What optimizations can be made?", 4)
            .placeholder(
                "Document performance improvements, efficiency gains, and optimizations...",
            )
            .section("System Optimization"),
    )
    .with_field(
        FormField::multiline("featureEnhancements", "What feature enhancements are planned?", 3)
            .placeholder("Plan and document new features based on user feedback and needs...")
            .section("Product Development"),
    )
    .with_field(
        FormField::multiline("modelImprovement", "What model improvements are needed?", 3)
            .placeholder("Document model improvements, retraining, and performance gains...")
            .section("Model Enhancement"),
    )
    .with_field(
        FormField::multiline(
            "processImprovement",
            "What operational process improvements can be made?",
            3,
        )
        .placeholder("Ways to optimize operational processes, workflows, and team efficiency...")
        .section("Process Improvement"),
    )
    .with_axis(ScoringAxis::new(
        "featureValue",
        "Feature Value",
        "Value delivered by new features based on user feedback",
        ["No Value", "Low Value", "Medium Value", "High Value", "Very High Value"],
    ))
    .with_axis(ScoringAxis::new(
        "modelPerformance",
        "Model Performance",
        "Improvement in model performance based on production data",
        ["Very Poor", "Poor", "Average", "Good", "Excellent"],
    ))
    .with_axis(ScoringAxis::new(
        "processEfficiency",
        "Process Efficiency",
        "Efficiency of operational processes and workflows",
        ["Very Inefficient", "Inefficient", "Average", "Efficient", "Very Efficient"],
    ))
    .with_scoring_title("Optimization & Iteration Scoring Assessment")
    .with_deliverables(&[
        "Optimization plan",
        "Performance improvements",
        "Lessons learned",
        "Next iteration roadmap",
    ])
}
