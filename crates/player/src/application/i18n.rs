//! UI string table and lookup
//!
//! Every visible string goes through [`translate`] with an English fallback,
//! so a missing key or a missing translation never renders blank.

use std::collections::HashMap;
use std::sync::LazyLock;

use growthwise_domain::Language;

/// key -> (English, Chinese)
static TRANSLATIONS: LazyLock<HashMap<&'static str, (&'static str, &'static str)>> =
    LazyLock::new(|| ENTRIES.iter().copied().map(|(k, en, zh)| (k, (en, zh))).collect());

const ENTRIES: &[(&str, &str, &str)] = &[
    // Home page
    ("home.title", "Personalized Growth Wisdom", "个性化成长智慧"),
    (
        "home.subtitle",
        "Discover your unique self-improvement path through AI-generated personalized plans based on your personality, skills, and life goals.",
        "发现你的独特自我提升之路，通过AI生成的个性化计划，根据你的性格类型、技能和人生目标量身定制。",
    ),
    ("create.plan.button", "Create Your Growth Plan", "生成您的成长计划"),
    ("how.it.works", "How It Works", "如何操作"),
    ("share.profile", "Share Your Profile", "分享您的个人资料"),
    (
        "share.profile.desc",
        "Tell us about your personality type, situation, and time commitments to help us understand your unique personal traits.",
        "告诉我们您的性格类型、现状和时间安排，帮助我们了解您的独特个人特点。",
    ),
    ("determine.goals", "Determine Your Goals", "确定您的目标"),
    (
        "determine.goals.desc",
        "Identify areas you want to improve and share your long-term life goals and aspirations.",
        "确定您想要提升的领域，分享您的长期人生目标和愿望。",
    ),
    ("get.plan", "Get Your Custom Plan", "获取您的定制计划"),
    (
        "get.plan.desc",
        "Receive a personalized growth plan tailored to your personality, strengths, and improvement goals.",
        "接收专为您的性格、优势和提升目标量身定制的个性化成长计划。",
    ),
    // Personality test links
    (
        "tests.heading",
        "Not sure about your personality type? Take a free test:",
        "不确定您的性格类型？点击下方链接进行免费测试：",
    ),
    ("tests.mbti", "Test my MBTI type", "测试我的MBTI类型"),
    ("tests.functions", "Test my Jungian cognitive functions", "测试我的荣格认知功能"),
    ("tests.enneagram", "Test my Enneagram type", "测试我的九型人格"),
    // API key settings
    ("api_key.title", "API Key", "API 密钥"),
    (
        "api_key.description",
        "Plans are written by a chat-completion service. Without a key you still get a locally generated plan.",
        "计划由对话补全服务生成。没有密钥时，您仍会获得一份本地生成的计划。",
    ),
    ("api_key.placeholder", "Paste your API key", "粘贴您的 API 密钥"),
    ("api_key.save", "Save", "保存"),
    ("api_key.clear", "Remove", "移除"),
    ("api_key.saved", "API key saved on this device", "API 密钥已保存在本设备"),
    ("api_key.cleared", "API key removed", "API 密钥已移除"),
    ("api_key.stored", "A key is stored on this device", "本设备已保存密钥"),
    (
        "api_key.from_env",
        "Using the key from the environment",
        "正在使用环境变量中的密钥",
    ),
    // Navigation
    ("back.home", "Back to Home", "返回首页"),
    ("back.questionnaire", "Back to Questionnaire", "返回问卷"),
    ("return.home", "Return to Home", "回到首页"),
    ("language.switch", "Switch language", "切换语言"),
    // Questionnaire page
    ("create.plan", "Create Your Personalized Growth Plan", "创建您的个性化成长计划"),
    (
        "answer.questions",
        "Answer the following questions to help us generate a tailored growth plan for your unique profile",
        "回答以下问题，帮助我们为您的独特个人资料生成量身定制的成长计划",
    ),
    // Step labels
    ("step.personality", "Personality", "性格"),
    ("step.situation", "Situation", "现状"),
    ("step.time", "Time", "时间"),
    ("step.goals", "Goals", "目标"),
    ("step.objectives", "Vision", "愿景"),
    // Personality step
    ("personality.type", "Your Personality Type", "您的性格类型"),
    (
        "personality.description",
        "Share your personality test results for tailored recommendations",
        "分享您的性格类型测试结果以获取量身定制的建议",
    ),
    (
        "personality.either",
        "Choose an MBTI type, an Enneagram type with its wing, or both.",
        "请选择MBTI类型，或九型人格及其侧翼，也可以两者都选。",
    ),
    ("mbti.type", "MBTI Type", "MBTI类型"),
    ("select.mbti", "Select your MBTI type", "选择您的MBTI类型"),
    ("enneagram.type", "Enneagram Type", "九型人格"),
    ("select.enneagram", "Select your Enneagram type", "选择您的九型人格"),
    ("enneagram.wing", "Wing", "侧翼"),
    ("select.wing", "Select your wing", "选择您的侧翼"),
    // Situation step
    ("situation.title", "Current Situation", "当前状况"),
    (
        "situation.description",
        "Tell us where you are today: work, studies, responsibilities",
        "告诉我们您目前的状况：工作、学习和主要责任",
    ),
    (
        "situation.placeholder",
        "For example: software engineer, two young kids, studying in the evenings...",
        "例如：软件工程师，有两个孩子，晚上在学习……",
    ),
    // Time step
    ("time.availability", "Time Availability", "时间安排"),
    (
        "time.description",
        "Let's understand how much time you can dedicate to personal growth",
        "让我们了解您可以投入多少时间用于个人成长",
    ),
    ("weekday.hours", "Weekday Hours (per day)", "工作日时间（每天）"),
    ("weekend.hours", "Weekend Hours (per day)", "周末时间（每天）"),
    ("hours", "hours", "小时"),
    ("weekly.total", "Weekly total", "每周合计"),
    ("preferred.time", "Preferred Time of Day", "首选时间段"),
    // Goals step
    ("improvement.goals", "Improvement Goals", "提升目标"),
    (
        "goals.description",
        "Select areas you want to focus on improving",
        "选择您想要重点提升的领域",
    ),
    ("goal", "Goal", "提升目标"),
    ("select.goal", "Select an improvement goal", "选择一个提升目标"),
    ("custom.goal", "Or type your own goal", "或输入您自己的目标"),
    // Objectives step
    ("life.objectives", "Life Objectives", "人生目标"),
    (
        "vision.description",
        "Share your long-term aspirations and life vision",
        "分享您的长期愿望和人生愿景",
    ),
    (
        "life.goals.question",
        "What are your main life goals and aspirations?",
        "您的主要人生目标和愿望是什么？",
    ),
    (
        "life.goals.placeholder",
        "Describe your long-term vision, life goals, and what success means to you...",
        "描述您的长期愿景、人生目标，以及成功对您意味着什么...",
    ),
    // Navigation buttons
    ("previous", "Previous", "上一步"),
    ("next", "Next", "下一步"),
    ("generate.plan", "Generate Plan", "生成计划"),
    // Validation
    (
        "validation.personality",
        "Please select your MBTI type, or an Enneagram type together with its wing",
        "请选择您的MBTI类型，或选择九型人格及其侧翼",
    ),
    (
        "validation.wing",
        "Please select a wing for your Enneagram type",
        "请为您的九型人格选择侧翼",
    ),
    (
        "validation.situation",
        "Please describe your current situation",
        "请描述您的当前状况",
    ),
    (
        "validation.goals",
        "Please choose at least one improvement goal",
        "请至少选择一个提升目标",
    ),
    (
        "validation.objectives",
        "Please share your life objectives",
        "请分享您的人生目标",
    ),
    // Results page
    ("results.title", "Your Growth Plan", "您的成长计划"),
    (
        "results.loading",
        "We're creating your personalized growth plan based on your inputs...",
        "我们正在根据您的输入创建个性化成长计划……",
    ),
    (
        "results.ready",
        "Your plan is ready! Download it or copy the content below.",
        "您的计划已准备好！可以下载或复制下方内容。",
    ),
    (
        "loading.message",
        "Creating your personalized growth plan...",
        "正在创建您的个性化成长计划……",
    ),
    ("plan.heading", "Your Personalized Growth Plan", "您的个性化成长计划"),
    ("copy", "Copy", "复制"),
    ("copied", "Copied", "已复制"),
    ("download", "Download", "下载"),
    ("export.svg", "Mind map (SVG)", "思维导图 (SVG)"),
    ("export.html", "Mind map (HTML)", "思维导图 (HTML)"),
    // Toasts
    ("toast.copied", "Content copied to clipboard", "内容已复制到剪贴板"),
    (
        "toast.copied.desc",
        "You can now paste your growth plan anywhere",
        "现在可以将成长计划粘贴到任何地方",
    ),
    ("toast.copy_failed", "Could not access the clipboard", "无法访问剪贴板"),
    ("toast.downloaded", "Plan downloaded successfully", "计划下载成功"),
    ("toast.saved_as", "Saved as {filename}", "已保存为 {filename}"),
    ("toast.export_failed", "Export failed", "导出失败"),
    (
        "toast.fallback",
        "Showing a locally generated plan",
        "显示的是本地生成的计划",
    ),
    (
        "toast.fallback.desc",
        "The plan service could not be reached, so this plan was assembled on your device.",
        "无法连接计划服务，此计划已在您的设备上生成。",
    ),
    // Not found
    ("not_found.title", "Page not found", "页面未找到"),
    (
        "not_found.description",
        "The page you are looking for does not exist.",
        "您访问的页面不存在。",
    ),
];

/// Look up `key` in `language`, or return `fallback`.
pub fn translate<'a>(language: Language, key: &str, fallback: &'a str) -> &'a str {
    let Some((en, zh)) = TRANSLATIONS.get(key) else {
        return fallback;
    };
    let text = match language {
        Language::En => *en,
        Language::Zh => *zh,
    };
    if text.is_empty() {
        fallback
    } else {
        text
    }
}

/// [`translate`], then replace each `{name}` placeholder.
pub fn translate_with(
    language: Language,
    key: &str,
    fallback: &str,
    args: &[(&str, &str)],
) -> String {
    args.iter().fold(
        translate(language, key, fallback).to_string(),
        |text, (name, value)| text.replace(&format!("{{{name}}}"), value),
    )
}
