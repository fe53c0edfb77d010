// Tailwind class bundles shared across components

pub const FOCUS_VISIBLE: &str =
    "focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-slate-600 dark:focus-visible:ring-slate-300";

pub const BORDER: &str = "border rounded-md border-slate-200 dark:border-slate-800";

pub const SUBTLE_ICON_STROKE: &str = "stroke-slate-500";

pub const SUBTLE_TEXT: &str = "text-sm text-slate-500 dark:text-slate-400";
