//! Static lesson content: the question, the answer template, and the
//! informational payloads attached to every scored result.

/// Displayed word target range.
pub const TARGET_WORDS: &str = "20–300";

/// Soft upper bound on answer length shown to learners.
pub const MAX_WORDS: usize = 300;

/// Scenario and instructions shown above the answer box.
pub const QUESTION_TEXT: &str = concat!(
    "Scenario:\n",
    "You work in a small team and have been given a basic spreadsheet that tracks tasks and deadlines for staff.\n",
    "The spreadsheet includes columns for task name, project owner, due date, and traffic-light status (red/amber/green).\n",
    "Some totals look wrong, and it’s hard to see which tasks are overdue or causing delays.\n",
    "\n",
    "You are new to spreadsheets and want to use AI as your thinking assistant to help you:\n",
    "- check whether the spreadsheet is structured sensibly\n",
    "- spot patterns or problems\n",
    "- suggest one simple improvement to make the data easier to understand\n",
    "\n",
    "=== TASK ===\n",
    "Write a prompt that asks AI to help you understand the spreadsheet and improve it.\n",
    "Your prompt must make clear what the columns contain, what you’re unsure about, and what output you want.\n",
    "\n",
    "=== USE THE FEthink STRUCTURE ===\n",
    "ROLE: Tell AI who you are, or what role you want it to adopt.\n",
    "TASK: What do you want AI to do?\n",
    "CONTEXT: Who is AI creating the content for, and what is the spreadsheet used for?\n",
    "FORMAT: How should AI present the answer (steps, bullet points, simple language) and what should it include?\n",
    "\n",
    "Aim for at least 20 words."
);

/// Skeleton inserted into the answer box on request.
pub const TEMPLATE_TEXT: &str = concat!(
    "Role:\n",
    "Task:\n",
    "Context (audience):\n",
    "Format (structure/tone):"
);

/// Exemplar answer attached to every scored result.
pub const MODEL_ANSWER: &str = concat!(
    "Role:\n",
    "Act as a patient spreadsheet tutor for beginners who explains things in simple English and avoids technical jargon.\n",
    "\n",
    "Task:\n",
    "Help me understand what is happening in my task-tracking spreadsheet and suggest two simple improvements to make it easier to manage.\n",
    "Please: briefly explain what the data shows, point out obvious problems or inconsistencies, and suggest one small structural improvement.\n",
    "\n",
    "Context (Audience):\n",
    "I work in a small team and I am new to spreadsheets.\n",
    "The spreadsheet tracks tasks, project owner, due date, and traffic-light status (red/amber/green).\n",
    "Some tasks feel overdue, one row looks inconsistent, and I’m not sure the columns are set up in the best way.\n",
    "I want to use it to keep on top of deadlines and spot problems early.\n",
    "\n",
    "Format:\n",
    "1) A short summary (2–3 sentences) of what the spreadsheet shows\n",
    "2) Three bullet points highlighting patterns or issues\n",
    "3) Two simple improvements I can make\n",
    "4) One practical next step I can do today in Excel or Google Sheets\n",
    "\n",
    "Use a friendly, supportive tone suitable for a beginner. Keep it practical."
);

/// Guidance on prompting about spreadsheets, attached to every scored result.
pub const LEARN_MORE_TEXT: &str = concat!(
    "When prompting AI about a spreadsheet, help it ‘see’ the data by describing the columns clearly.\n",
    "Good prompts ask for: (1) what the data suggests, (2) any inconsistencies, and (3) simple improvements.\n",
    "\n",
    "Try including:\n",
    "- what each column means\n",
    "- what problem you are trying to solve (e.g., overdue tasks, unclear status)\n",
    "- the output format you want (steps, bullet points, simple actions)\n",
    "\n",
    "If your prompt is vague, AI will reply vaguely. Specific prompts produce useful guidance."
);
