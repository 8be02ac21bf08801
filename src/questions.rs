//! The embedded 20-question quiz.
//!
//! Each question carries exactly four answers. Every answer awards points to a
//! handful of archetypes; archetypes missing from an answer receive nothing.
//! Score maps keep their authored order so the persisted JSON matches the
//! table below entry for entry.

use crate::constants::{NUM_QUESTIONS, OPTIONS_PER_QUESTION};
use crate::types::Archetype::{self, *};
use crate::types::{AnswerOption, Question, QuestionSet};

/// (answer text, archetype points)
type OptionRow = (&'static str, &'static [(Archetype, u32)]);

/// (id, prompt, answers)
type QuestionRow = (u32, &'static str, [OptionRow; OPTIONS_PER_QUESTION]);

const QUESTION_TABLE: [QuestionRow; NUM_QUESTIONS] = [
    (
        1,
        "하나님께서 큰 사명을 주셨을 때 당신은?",
        [
            (
                "즉시 순종하며 행동에 옮긴다",
                &[(David, 4), (Peter, 4), (Rebekah, 3), (Paul, 2), (Jeremiah, 1)],
            ),
            (
                "깊이 기도하며 하나님의 뜻을 더 구한다",
                &[(Mary, 4), (Jeremiah, 4), (Barnabas, 3), (Esther, 3)],
            ),
            (
                "계획을 세우고 체계적으로 준비한다",
                &[(Noah, 4), (Moses, 4), (Luke, 4), (Solomon, 3), (Peter, 1)],
            ),
            (
                "지혜로운 조언자들과 상의한다",
                &[(Solomon, 4), (Esther, 5), (Luke, 3), (Barnabas, 2), (David, 1)],
            ),
        ],
    ),
    (
        2,
        "어려운 상황에 직면했을 때 당신의 첫 반응은?",
        [
            (
                "다른 사람들과 함께 해결책을 찾는다",
                &[(Deborah, 4), (Barnabas, 4), (Paul, 3), (Esther, 4)],
            ),
            (
                "홀로 조용한 곳에서 기도하며 답을 구한다",
                &[(Jeremiah, 4), (Mary, 4), (Barnabas, 2), (David, 2)],
            ),
            (
                "주변 사람들을 격려하고 이끌어 나간다",
                &[(Paul, 4), (Deborah, 4), (Moses, 4), (Peter, 3)],
            ),
            (
                "신중히 생각하고 분석한 후 행동한다",
                &[(Solomon, 4), (Luke, 4), (Joseph, 5), (Noah, 3)],
            ),
        ],
    ),
    (
        3,
        "새로운 공동체에 들어갔을 때 당신은?",
        [
            (
                "적극적으로 사람들에게 다가가 인사한다",
                &[(Peter, 4), (Paul, 4), (David, 3), (Rebekah, 2)],
            ),
            (
                "먼저 관찰하며 분위기를 파악한다",
                &[(Luke, 4), (Joseph, 4), (Solomon, 3), (Esther, 4)],
            ),
            (
                "봉사할 곳을 찾아 섬김에 참여한다",
                &[(Barnabas, 4), (Mary, 4), (Esther, 3), (Luke, 3)],
            ),
            (
                "조용히 예배에 집중하며 은혜받기를 원한다",
                &[(Jeremiah, 4), (Mary, 3), (Noah, 3), (Daniel, 2)],
            ),
        ],
    ),
    (
        4,
        "팀 사역을 할 때 당신의 역할은?",
        [
            (
                "팀원들과 소통하며 분위기를 이끈다",
                &[(Peter, 4), (Paul, 4), (David, 3), (Barnabas, 2)],
            ),
            (
                "묵묵히 자신의 역할에 충실한다",
                &[(Luke, 4), (Mary, 4), (Joseph, 4), (Noah, 3)],
            ),
            (
                "전체적인 방향을 제시하고 조직한다",
                &[(Moses, 4), (Deborah, 4), (Solomon, 3), (Paul, 3)],
            ),
            (
                "깊이 있는 아이디어와 통찰을 제공한다",
                &[(Solomon, 4), (Joseph, 5), (Jeremiah, 4), (Luke, 3)],
            ),
        ],
    ),
    (
        5,
        "에너지를 충전하는 방법은?",
        [
            (
                "사람들과 함께 교제하며 대화한다",
                &[(Peter, 4), (Paul, 4), (David, 3), (Barnabas, 3)],
            ),
            (
                "혼자만의 시간을 가지며 조용히 묵상한다",
                &[(Jeremiah, 4), (Mary, 4), (Luke, 3), (Daniel, 3), (Peter, 1)],
            ),
            (
                "새로운 프로젝트나 도전에 몰입한다",
                &[(Deborah, 4), (Joseph, 5), (Solomon, 3), (Rebekah, 3)],
            ),
            (
                "규칙적인 일상과 안정적인 환경에서",
                &[(Noah, 4), (Moses, 4), (Luke, 4), (Solomon, 2)],
            ),
        ],
    ),
    (
        6,
        "하나님의 말씀을 다룰 때 당신은?",
        [
            (
                "다른 사람들과 함께 나누며 토론한다",
                &[(Paul, 4), (Barnabas, 4), (Peter, 3), (Deborah, 2), (Jeremiah, 1)],
            ),
            (
                "개인적으로 묵상하며 깊이 있게 생각한다",
                &[(Mary, 4), (Jeremiah, 4), (Daniel, 3), (Solomon, 3)],
            ),
            (
                "실생활에 어떻게 적용할지 구체적으로 계획한다",
                &[(Noah, 3), (Moses, 5), (Luke, 4), (Esther, 4)],
            ),
            (
                "지혜와 통찰을 구하며 분석적으로 연구한다",
                &[(Solomon, 4), (Luke, 4), (Joseph, 4), (Daniel, 3)],
            ),
        ],
    ),
    (
        7,
        "미래에 대한 하나님의 인도하심을 구할 때?",
        [
            (
                "신뢰하는 조언자들과 상담하며 지혜를 구한다",
                &[(Esther, 5), (Solomon, 3), (Barnabas, 3), (Luke, 2)],
            ),
            (
                "기도와 말씀을 통해 직접 하나님께 구한다",
                &[(Daniel, 4), (Jeremiah, 4), (Mary, 3), (David, 3)],
            ),
            (
                "여러 가능성을 분석하고 체계적으로 준비한다",
                &[(Solomon, 4), (Luke, 4), (Joseph, 5), (Noah, 3)],
            ),
            (
                "하나님을 신뢰하며 한 걸음씩 순종한다",
                &[(Noah, 4), (Moses, 4), (Mary, 3), (David, 3)],
            ),
        ],
    ),
    (
        8,
        "문제 해결 방법을 찾을 때?",
        [
            (
                "주변 사람들과 브레인스토밍한다",
                &[(Paul, 4), (Deborah, 3), (Barnabas, 3), (Peter, 3)],
            ),
            (
                "혼자 깊이 생각하며 최선의 방법을 찾는다",
                &[(Solomon, 4), (Joseph, 5), (Jeremiah, 3), (Luke, 4)],
            ),
            (
                "과거 경험과 사례를 참고한다",
                &[(Luke, 4), (Moses, 4), (Noah, 3), (Solomon, 2)],
            ),
            (
                "즉석에서 창의적으로 대응한다",
                &[(David, 4), (Peter, 3), (Joseph, 3), (Rebekah, 3)],
            ),
        ],
    ),
    (
        9,
        "하나님의 부르심을 분별할 때?",
        [
            (
                "공동체의 확신과 동의를 구한다",
                &[(Paul, 3), (Esther, 4), (Barnabas, 2), (Deborah, 2)],
            ),
            (
                "개인적인 기도와 말씀 확신을 통해",
                &[(Jeremiah, 4), (Daniel, 4), (Mary, 3), (David, 3)],
            ),
            (
                "성경적 원리와 지혜를 통해 판단한다",
                &[(Solomon, 4), (Moses, 5), (Luke, 4), (Joseph, 3)],
            ),
            (
                "하나님의 때를 기다리며 인내한다",
                &[(Noah, 4), (Moses, 3), (Mary, 3), (Esther, 4)],
            ),
        ],
    ),
    (
        10,
        "복음을 전할 때 당신의 방법은?",
        [
            (
                "적극적으로 사람들에게 다가가 직접 전한다",
                &[(Peter, 4), (Paul, 4), (David, 3), (Barnabas, 2), (Jeremiah, 1)],
            ),
            (
                "개인적 관계를 통해 자연스럽게 전한다",
                &[(Barnabas, 4), (Luke, 3), (Mary, 3), (Esther, 3)],
            ),
            (
                "체계적인 가르침과 설명으로",
                &[(Paul, 3), (Luke, 4), (Moses, 4), (Solomon, 3)],
            ),
            (
                "삶의 모범을 통해 조용히 증거한다",
                &[(Mary, 4), (Joseph, 5), (Daniel, 4), (Noah, 3)],
            ),
        ],
    ),
    (
        11,
        "공동체에서 갈등이 생겼을 때?",
        [
            (
                "적극적으로 중재에 나서 해결을 도모한다",
                &[(Moses, 4), (Paul, 4), (Deborah, 4), (Barnabas, 3)],
            ),
            (
                "조용히 기도하며 하나님의 인도하심을 구한다",
                &[(Jeremiah, 4), (Mary, 3), (Daniel, 3), (David, 3)],
            ),
            (
                "객관적으로 분석하여 공정한 해결책을 제시한다",
                &[(Solomon, 4), (Luke, 3), (Joseph, 5), (Deborah, 3)],
            ),
            (
                "화해와 용서의 분위기를 조성한다",
                &[(Barnabas, 4), (Joseph, 4), (David, 3), (Esther, 3)],
            ),
        ],
    ),
    (
        12,
        "중요한 결정을 내려야 할 때?",
        [
            (
                "신뢰하는 사람들과 충분히 상의한다",
                &[(Esther, 5), (Paul, 3), (Barnabas, 3), (Solomon, 2)],
            ),
            (
                "하나님께 기도하며 확신을 구한다",
                &[(Daniel, 4), (Jeremiah, 4), (Mary, 3), (David, 3)],
            ),
            (
                "모든 정보를 수집하고 분석한 후 결정한다",
                &[(Solomon, 4), (Luke, 4), (Joseph, 5), (Moses, 3)],
            ),
            (
                "직감과 영감을 따라 과감하게 결정한다",
                &[(David, 4), (Peter, 3), (Rebekah, 3), (Deborah, 3)],
            ),
        ],
    ),
    (
        13,
        "다른 사람을 도울 때?",
        [
            (
                "함께 행동하며 직접적으로 문제를 해결한다",
                &[(Peter, 4), (Moses, 3), (Deborah, 3), (Paul, 3)],
            ),
            (
                "조용히 뒤에서 필요한 것을 지원한다",
                &[(Barnabas, 4), (Luke, 4), (Mary, 4), (Esther, 3)],
            ),
            (
                "체계적으로 계획을 세워 장기적으로 돕는다",
                &[(Luke, 4), (Joseph, 5), (Solomon, 3), (Moses, 4)],
            ),
            (
                "상황에 맞춰 유연하게 도움을 준다",
                &[(Joseph, 4), (Rebekah, 3), (David, 3), (Esther, 4)],
            ),
        ],
    ),
    (
        14,
        "말씀을 가르칠 때?",
        [
            (
                "참여자들과 활발히 토론하며 진행한다",
                &[(Paul, 4), (Peter, 3), (Barnabas, 3), (Deborah, 3)],
            ),
            (
                "차분하고 깊이 있게 말씀을 전한다",
                &[(Jeremiah, 4), (Luke, 3), (Solomon, 3), (Daniel, 3)],
            ),
            (
                "체계적으로 구조화하여 가르친다",
                &[(Luke, 4), (Moses, 5), (Paul, 3), (Solomon, 3)],
            ),
            (
                "실생활 적용에 초점을 맞춰 진행한다",
                &[(Moses, 4), (Joseph, 4), (Noah, 3), (Esther, 3)],
            ),
        ],
    ),
    (
        15,
        "일상생활을 관리할 때?",
        [
            (
                "계획을 세우고 체계적으로 실행한다",
                &[(Luke, 4), (Moses, 4), (Joseph, 4), (Noah, 4)],
            ),
            (
                "상황에 따라 유연하게 대응한다",
                &[(Joseph, 4), (Rebekah, 4), (David, 3), (Peter, 3)],
            ),
            (
                "다른 사람들과 협력하며 함께 진행한다",
                &[(Paul, 4), (Barnabas, 3), (Moses, 3), (Deborah, 3)],
            ),
            (
                "기도하며 하나님께 맡기고 순종한다",
                &[(Mary, 4), (Daniel, 4), (Jeremiah, 3), (Noah, 3)],
            ),
        ],
    ),
    (
        16,
        "예상치 못한 상황이 생겼을 때?",
        [
            (
                "즉시 행동하며 적극적으로 대처한다",
                &[(Peter, 4), (David, 3), (Rebekah, 3), (Deborah, 3), (Luke, 1)],
            ),
            (
                "일단 멈추고 기도하며 하나님께 구한다",
                &[(Daniel, 4), (Jeremiah, 3), (Mary, 3), (David, 3)],
            ),
            (
                "상황을 분석하고 최선의 방법을 찾는다",
                &[(Solomon, 4), (Luke, 4), (Joseph, 5), (Moses, 3)],
            ),
            (
                "경험과 지혜를 바탕으로 신중히 대응한다",
                &[(Moses, 4), (Joseph, 4), (Noah, 3), (Esther, 4)],
            ),
        ],
    ),
    (
        17,
        "새로운 사역을 시작할 때?",
        [
            (
                "사람들을 모으고 팀을 구성한다",
                &[(Moses, 4), (Paul, 4), (Deborah, 4), (Barnabas, 3)],
            ),
            (
                "충분히 기도하고 준비한 후 시작한다",
                &[(Jeremiah, 4), (Daniel, 3), (Mary, 3), (Moses, 3)],
            ),
            (
                "체계적인 계획과 준비를 통해 시작한다",
                &[(Luke, 4), (Joseph, 5), (Solomon, 4), (Moses, 4)],
            ),
            (
                "하나님의 때를 기다리며 순종한다",
                &[(Mary, 4), (Esther, 4), (Noah, 3), (Daniel, 3)],
            ),
        ],
    ),
    (
        18,
        "골리앗과 같은 거대한 도전 앞에서 당신은?",
        [
            (
                "하나님을 향한 믿음으로 과감히 맞선다",
                &[(David, 4), (Daniel, 4), (Peter, 3), (Deborah, 3)],
            ),
            (
                "기도하며 하나님의 도우심을 간구한다",
                &[(Jeremiah, 4), (Mary, 3), (Esther, 4), (Daniel, 3)],
            ),
            (
                "체계적으로 준비하고 전략을 세운다",
                &[(Solomon, 4), (Moses, 4), (Joseph, 5), (Luke, 3)],
            ),
            (
                "다른 사람들과 함께 연합하여 대응한다",
                &[(Deborah, 4), (Moses, 4), (Esther, 5), (Paul, 3)],
            ),
        ],
    ),
    (
        19,
        "홍해 앞에서 이집트 군대가 뒤쫓아올 때 당신은?",
        [
            (
                "하나님께서 길을 열어주실 것을 확신한다",
                &[(Moses, 5), (Noah, 3), (Daniel, 3), (Mary, 3)],
            ),
            (
                "백성들을 격려하며 하나님을 의지하자고 외친다",
                &[(Moses, 4), (Paul, 4), (Peter, 3), (Deborah, 3)],
            ),
            (
                "현실적인 대안을 찾아 신속히 행동한다",
                &[(Joseph, 4), (Rebekah, 4), (Solomon, 3), (Luke, 2)],
            ),
            (
                "조용히 기도하며 하나님의 인도하심을 기다린다",
                &[(Jeremiah, 4), (Mary, 4), (Luke, 3), (Esther, 3)],
            ),
        ],
    ),
    (
        20,
        "바벨탑을 쌓자는 제안이 나왔을 때 당신은?",
        [
            (
                "하나님의 뜻이 아님을 분명히 반대한다",
                &[(Jeremiah, 4), (Moses, 4), (Daniel, 4), (Noah, 3)],
            ),
            (
                "사람들을 설득하여 바른 길로 인도한다",
                &[(Paul, 4), (Moses, 4), (Deborah, 3), (Barnabas, 3)],
            ),
            (
                "하나님의 심판을 경고하며 회개를 촉구한다",
                &[(Jeremiah, 5), (Peter, 3), (Moses, 3), (Paul, 3)],
            ),
            (
                "조용히 떠나 하나님의 뜻을 따른다",
                &[(Noah, 4), (Luke, 3), (Mary, 3), (Esther, 2)],
            ),
        ],
    ),
];

/// Build the embedded question set.
///
/// Pure: every call returns structurally identical data.
pub fn question_set() -> QuestionSet {
    let questions = QUESTION_TABLE
        .iter()
        .map(|(id, text, options)| Question {
            id: *id,
            text: (*text).to_string(),
            options: options
                .iter()
                .map(|(text, scores)| AnswerOption {
                    text: (*text).to_string(),
                    scores: scores.iter().copied().collect(),
                })
                .collect(),
        })
        .collect();
    QuestionSet::new(questions)
}
