//! Built-in catalogue of pattern-recognition terms.

use crate::db::NewTerm;

/// The default catalogue seeded into an empty glossary.
pub fn default_catalogue() -> Vec<NewTerm> {
    vec![
        NewTerm::new(
            "design-pattern",
            "Паттерн проектирования (Design Pattern)",
            "Типовое архитектурное решение, описывающее способ взаимодействия объектов и классов \
             для решения часто встречающихся задач проектирования. Делятся на порождающие, \
             структурные и поведенческие (GoF).",
        ),
        NewTerm::new(
            "static-analysis",
            "Статический анализ (Static Analysis)",
            "Метод исследования исходного кода без его выполнения. Используется для выявления \
             структурных признаков (классы, методы, зависимости), необходимых при детектировании \
             паттернов.",
        ),
        NewTerm::new(
            "ast",
            "Абстрактное синтаксическое дерево (AST — Abstract Syntax Tree)",
            "Иерархическое представление структуры исходного кода. Применяется для формального \
             описания и поиска шаблонов проектирования на уровне синтаксиса.",
        ),
        NewTerm::new(
            "graph-based-analysis",
            "Графовый анализ (Graph-based Analysis)",
            "Метод представления программ в виде графов зависимостей (class graphs, call graphs), \
             где узлы — сущности, а рёбра — их отношения. Позволяет искать подграфы, \
             соответствующие структурам паттернов.",
        ),
        NewTerm::new(
            "code-embeddings",
            "Эмбеддинги кода (Code Embeddings)",
            "Векторные представления программного кода, получаемые с помощью языковых моделей \
             (CodeLlama, DeepSeekCoder, CodeBERT). Используются для обучения классификаторов \
             распознавания паттернов.",
        ),
        NewTerm::new(
            "gnn",
            "Графовые нейронные сети (GNN — Graph Neural Networks)",
            "Архитектуры машинного обучения, обрабатывающие данные в виде графов. Позволяют \
             учитывать контекстные связи между объектами и повышают точность идентификации \
             шаблонов проектирования.",
        ),
        NewTerm::new(
            "pattern-framework",
            "Фреймворк распознавания паттернов (Pattern Recognition Framework)",
            "Программная система, объединяющая методы анализа кода, построения признаков и \
             классификации. Предназначена для автоматического выявления архитектурных шаблонов \
             в программных проектах.",
        ),
        NewTerm::new(
            "ml-methods",
            "Методы машинного обучения (Machine Learning Methods)",
            "Класс алгоритмов, используемых для классификации и анализа признаков кода: SVM, \
             Random Forest, MLP, Gradient Boosting. Применяются для обучения моделей, способных \
             отличать различные паттерны.",
        ),
        NewTerm::new(
            "tsne",
            "t-SNE визуализация (t-distributed Stochastic Neighbor Embedding)",
            "Метод понижения размерности, применяемый для анализа и визуализации многомерных \
             эмбеддингов. Помогает выявлять скрытые структуры и кластеры, соответствующие \
             различным паттернам.",
        ),
        NewTerm::new(
            "hybrid-approaches",
            "Гибридные подходы к распознаванию (Hybrid Detection Approaches)",
            "Комбинация правил, статического анализа и машинного обучения. Используется для \
             повышения устойчивости алгоритмов к вариативности реализаций паттернов и различиям \
             в языках программирования.",
        ),
    ]
}
