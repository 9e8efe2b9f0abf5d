//! Console text shown to the player. All of it is Russian.

pub const ROUND_SEPARATOR: &str = "---";
pub const ROUND_PROMPT: &str = "Новый раунд, введите число:";
pub const INVALID_GUESS: &str = "Введите корректное значение (1 или 2)!";
pub const WIN: &str = "Победа ваша!";
pub const LOSS: &str = "Вы проиграли, в следующей раз вам обязательно повезет!";
pub const FILE_NOT_FOUND: &str = "Указанный файл не найден";

pub const ROUNDS_LABEL: &str = "Количество раундов";
pub const WINS_LABEL: &str = "Количество побед";
