use crate::models::StatsAggregate;

pub fn render_index(date_label: &str, stats: &StatsAggregate, quote: &str) -> String {
    INDEX_HTML
        .replace("{{DATE}}", date_label)
        .replace("{{STREAK}}", &stats.streak.to_string())
        .replace("{{COMPLETED}}", &stats.completed_tasks.to_string())
        .replace("{{HOURS}}", &stats.study_hours.to_string())
        .replace("{{ACHIEVEMENTS}}", &stats.achievements.to_string())
        .replace("{{QUOTE}}", quote)
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Learning Hub</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #0f172a;
      --bg-2: #1e293b;
      --ink: #e2e8f0;
      --muted: #94a3b8;
      --accent: #3b82f6;
      --accent-soft: rgba(59, 130, 246, 0.18);
      --good: #22c55e;
      --danger: #ef4444;
      --card: rgba(30, 41, 59, 0.85);
      --border: 1px solid rgba(148, 163, 184, 0.15);
      --shadow: 0 24px 60px rgba(2, 6, 23, 0.45);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 55%),
        linear-gradient(160deg, var(--bg-1), #111827 70%, #0b1120 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      padding: 28px 18px 48px;
      display: flex;
      justify-content: center;
    }

    .app {
      width: min(980px, 100%);
      display: grid;
      gap: 24px;
    }

    header.top {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 16px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
      margin: 0;
    }

    .subtitle {
      margin: 4px 0 0;
      color: var(--muted);
      font-size: 0.95rem;
    }

    nav {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(148, 163, 184, 0.08);
      border-radius: 999px;
    }

    .nav-link {
      appearance: none;
      background: transparent;
      border: none;
      border-radius: 999px;
      padding: 9px 16px;
      font-size: 0.92rem;
      font-weight: 600;
      color: var(--muted);
      cursor: pointer;
    }

    .nav-link.active {
      background: var(--accent);
      color: white;
      box-shadow: 0 8px 18px rgba(59, 130, 246, 0.35);
    }

    section.view {
      display: none;
    }

    section.view.active {
      display: grid;
      gap: 20px;
      animation: rise 400ms ease;
    }

    .card {
      background: var(--card);
      backdrop-filter: blur(10px);
      border-radius: 20px;
      border: var(--border);
      box-shadow: var(--shadow);
      padding: 22px;
    }

    .tiles {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(170px, 1fr));
      gap: 14px;
    }

    .tile {
      background: rgba(15, 23, 42, 0.6);
      border-radius: 16px;
      border: var(--border);
      padding: 16px;
      display: grid;
      gap: 6px;
    }

    .tile .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: var(--muted);
    }

    .tile .value {
      font-size: 1.6rem;
      font-weight: 600;
      color: var(--accent);
    }

    .dash-row {
      display: grid;
      grid-template-columns: 2fr 1fr;
      gap: 20px;
    }

    @media (max-width: 720px) {
      .dash-row {
        grid-template-columns: 1fr;
      }
    }

    .quote {
      font-family: "Fraunces", "Georgia", serif;
      font-size: 1.05rem;
      line-height: 1.6;
      color: var(--ink);
      margin: 0;
    }

    .ring-wrap {
      display: grid;
      place-items: center;
      gap: 8px;
    }

    .ring-label {
      color: var(--muted);
      font-size: 0.85rem;
    }

    .task-row {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 10px;
      padding: 10px 12px;
      border-radius: 12px;
      background: rgba(15, 23, 42, 0.55);
      border: var(--border);
    }

    .task-row + .task-row {
      margin-top: 8px;
    }

    .task-row.completed .task-text {
      text-decoration: line-through;
      color: var(--muted);
    }

    .task-actions {
      display: flex;
      gap: 6px;
    }

    .task-actions button {
      appearance: none;
      border: none;
      border-radius: 8px;
      padding: 6px 10px;
      font-weight: 600;
      cursor: pointer;
      font-size: 0.8rem;
    }

    .toggle-btn {
      background: var(--accent-soft);
      color: var(--accent);
    }

    .delete-btn {
      background: rgba(239, 68, 68, 0.15);
      color: var(--danger);
    }

    .empty-note {
      color: var(--muted);
      text-align: center;
      padding: 18px 0;
    }

    .phase-card h3 {
      margin: 0;
      font-size: 1.1rem;
      color: var(--accent);
    }

    .phase-meta {
      margin: 4px 0 12px;
      color: var(--muted);
      font-size: 0.88rem;
    }

    .topics {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
      gap: 8px;
    }

    .topic {
      background: rgba(15, 23, 42, 0.55);
      border: var(--border);
      border-radius: 10px;
      padding: 9px 12px;
      font-size: 0.88rem;
    }

    .cal-header {
      display: flex;
      align-items: center;
      justify-content: space-between;
      margin-bottom: 14px;
    }

    .cal-header h2 {
      margin: 0;
      font-size: 1.2rem;
    }

    .cal-nav {
      appearance: none;
      border: none;
      background: var(--accent-soft);
      color: var(--accent);
      border-radius: 10px;
      padding: 8px 14px;
      font-weight: 700;
      cursor: pointer;
    }

    .grid {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 6px;
    }

    .dow {
      text-align: center;
      color: var(--accent);
      font-size: 0.78rem;
      font-weight: 600;
      padding: 6px 0;
    }

    .day {
      position: relative;
      aspect-ratio: 1 / 0.8;
      display: grid;
      place-items: center;
      border-radius: 10px;
      background: rgba(15, 23, 42, 0.55);
      border: var(--border);
      cursor: pointer;
      font-size: 0.9rem;
    }

    .day.blank {
      background: transparent;
      border: none;
      cursor: default;
    }

    .day.today {
      outline: 2px solid var(--accent);
    }

    .day.has-tasks::after {
      content: "";
      position: absolute;
      bottom: 6px;
      width: 5px;
      height: 5px;
      border-radius: 50%;
      background: var(--good);
    }

    .day.selected {
      background: var(--accent);
      color: white;
    }

    .add-row {
      display: flex;
      gap: 8px;
      margin-top: 12px;
    }

    .add-row input {
      flex: 1;
      background: rgba(15, 23, 42, 0.7);
      border: var(--border);
      border-radius: 10px;
      color: var(--ink);
      padding: 10px 12px;
      font-family: inherit;
      font-size: 0.92rem;
    }

    .add-row button {
      appearance: none;
      border: none;
      border-radius: 10px;
      background: var(--accent);
      color: white;
      font-weight: 600;
      padding: 10px 16px;
      cursor: pointer;
    }

    #day-details {
      display: none;
    }

    .banner {
      display: none;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
      background: var(--accent-soft);
      border: 1px solid rgba(59, 130, 246, 0.4);
      border-radius: 14px;
      padding: 12px 16px;
    }

    .banner.visible {
      display: flex;
    }

    .banner button {
      appearance: none;
      border: none;
      border-radius: 8px;
      padding: 8px 12px;
      font-weight: 600;
      cursor: pointer;
    }

    #enable-reminders {
      background: var(--accent);
      color: white;
    }

    #skip-reminders {
      background: transparent;
      color: var(--muted);
    }

    .status {
      min-height: 1.2em;
      font-size: 0.9rem;
      color: var(--muted);
    }

    .status[data-type="error"] {
      color: var(--danger);
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(14px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header class="top">
      <div>
        <h1>Learning Hub</h1>
        <p class="subtitle" id="today-label">{{DATE}}</p>
      </div>
      <nav>
        <button class="nav-link active" data-view="dashboard">Dashboard</button>
        <button class="nav-link" data-view="syllabus">Syllabus</button>
        <button class="nav-link" data-view="calendar">Calendar</button>
      </nav>
    </header>

    <div class="banner" id="reminder-banner">
      <span>Want a daily 9:00 reminder for your learning goals?</span>
      <div>
        <button id="enable-reminders" type="button">Enable</button>
        <button id="skip-reminders" type="button">Skip</button>
      </div>
    </div>

    <section class="view active" id="dashboard">
      <div class="tiles">
        <div class="tile">
          <span class="label">Day streak</span>
          <span class="value" id="streak">{{STREAK}}</span>
        </div>
        <div class="tile">
          <span class="label">Tasks completed</span>
          <span class="value" id="completed">{{COMPLETED}}</span>
        </div>
        <div class="tile">
          <span class="label">Study hours</span>
          <span class="value" id="hours">{{HOURS}}</span>
        </div>
        <div class="tile">
          <span class="label">Achievements</span>
          <span class="value" id="achievements">{{ACHIEVEMENTS}}</span>
        </div>
      </div>

      <div class="dash-row">
        <div class="card">
          <h2 style="margin-top: 0">Today's learning goals</h2>
          <div id="today-tasks">
            <p class="empty-note">No tasks scheduled for today. Add some from the calendar!</p>
          </div>
        </div>
        <div class="card ring-wrap">
          <svg width="130" height="130" viewBox="0 0 130 130" role="img" aria-label="Syllabus progress">
            <circle cx="65" cy="65" r="54" fill="none" stroke="rgba(148,163,184,0.2)" stroke-width="10" />
            <circle id="ring" cx="65" cy="65" r="54" fill="none" stroke="#3b82f6" stroke-width="10"
              stroke-linecap="round" transform="rotate(-90 65 65)" />
            <text id="ring-text" x="65" y="71" text-anchor="middle" fill="#e2e8f0"
              font-size="22" font-weight="600">0%</text>
          </svg>
          <span class="ring-label">Syllabus progress</span>
        </div>
      </div>

      <div class="card">
        <p class="quote" id="quote">&ldquo;{{QUOTE}}&rdquo;</p>
      </div>
    </section>

    <section class="view" id="syllabus">
      <div id="syllabus-content"></div>
    </section>

    <section class="view" id="calendar">
      <div class="card">
        <div class="cal-header">
          <button class="cal-nav" id="prev-month" type="button">&larr;</button>
          <h2 id="month-label"></h2>
          <button class="cal-nav" id="next-month" type="button">&rarr;</button>
        </div>
        <div class="grid" id="calendar-grid"></div>
      </div>

      <div class="card" id="day-details">
        <h2 style="margin-top: 0" id="selected-date"></h2>
        <div id="tasks-list"></div>
        <div class="add-row">
          <input id="new-task" type="text" placeholder="Add a learning task..." />
          <button id="add-task" type="button">Add</button>
        </div>
      </div>

      <div class="status" id="status"></div>
    </section>
  </main>

  <script>
    const state = {
      viewYear: new Date().getFullYear(),
      viewMonth: new Date().getMonth() + 1,
      selectedDate: null
    };

    const statusEl = document.getElementById('status');

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const escapeHtml = (text) =>
      text.replace(/[&<>"']/g, (ch) => ({
        '&': '&amp;',
        '<': '&lt;',
        '>': '&gt;',
        '"': '&quot;',
        "'": '&#39;'
      })[ch]);

    const api = async (path, options) => {
      const res = await fetch(path, options);
      if (!res.ok) {
        const body = await res.json().catch(() => ({}));
        throw new Error(body.error || `Request failed (${res.status})`);
      }
      return res.json();
    };

    // --- Navigation ---
    const navLinks = Array.from(document.querySelectorAll('.nav-link'));
    const views = Array.from(document.querySelectorAll('.view'));

    navLinks.forEach((link) => {
      link.addEventListener('click', () => {
        navLinks.forEach((nl) => nl.classList.remove('active'));
        views.forEach((view) => view.classList.remove('active'));
        link.classList.add('active');
        document.getElementById(link.dataset.view).classList.add('active');
      });
    });

    // --- Dashboard ---
    const renderTodayTasks = (tasks) => {
      const container = document.getElementById('today-tasks');
      if (!tasks.length) {
        container.innerHTML =
          '<p class="empty-note">No tasks scheduled for today. Add some from the calendar!</p>';
        return;
      }
      container.innerHTML = tasks
        .map(
          (task) => `
            <div class="task-row ${task.completed ? 'completed' : ''}">
              <span class="task-text">${escapeHtml(task.text)}</span>
            </div>`
        )
        .join('');
    };

    const renderRing = (percent) => {
      const circumference = 2 * Math.PI * 54;
      const ring = document.getElementById('ring');
      ring.setAttribute('stroke-dasharray', `${circumference} ${circumference}`);
      ring.setAttribute('stroke-dashoffset', circumference - (percent / 100) * circumference);
      document.getElementById('ring-text').textContent = `${percent}%`;
    };

    const loadDashboard = async () => {
      const data = await api('/api/dashboard');
      document.getElementById('streak').textContent = data.stats.streak;
      document.getElementById('completed').textContent = data.stats.completed_tasks;
      document.getElementById('hours').textContent = data.stats.study_hours;
      document.getElementById('achievements').textContent = data.stats.achievements;
      document.getElementById('quote').innerHTML = `&ldquo;${escapeHtml(data.quote)}&rdquo;`;
      renderTodayTasks(data.today_tasks);
      renderRing(data.progress.percent);
    };

    // --- Syllabus ---
    const loadSyllabus = async () => {
      const phases = await api('/api/syllabus');
      document.getElementById('syllabus-content').innerHTML = phases
        .map(
          (phase, index) => `
            <div class="card phase-card" style="margin-bottom: 14px; animation-delay: ${index * 0.05}s">
              <h3>${escapeHtml(phase.phase)}</h3>
              <p class="phase-meta">Duration: ${escapeHtml(phase.duration)} &middot; ${escapeHtml(phase.description)}</p>
              <div class="topics">
                ${phase.topics.map((topic) => `<div class="topic">${escapeHtml(topic)}</div>`).join('')}
              </div>
            </div>`
        )
        .join('');
    };

    // --- Calendar ---
    const loadCalendar = async () => {
      const grid = await api(`/api/calendar/${state.viewYear}/${state.viewMonth}`);
      document.getElementById('month-label').textContent = grid.label;

      const cells = [];
      for (const dow of ['Sun', 'Mon', 'Tue', 'Wed', 'Thu', 'Fri', 'Sat']) {
        cells.push(`<div class="dow">${dow}</div>`);
      }
      for (let i = 0; i < grid.leading_blanks; i += 1) {
        cells.push('<div class="day blank"></div>');
      }
      for (const cell of grid.cells) {
        const classes = ['day'];
        if (cell.is_today) classes.push('today');
        if (cell.has_tasks) classes.push('has-tasks');
        if (cell.date === state.selectedDate) classes.push('selected');
        cells.push(`<div class="${classes.join(' ')}" data-date="${cell.date}">${cell.day}</div>`);
      }
      const gridEl = document.getElementById('calendar-grid');
      gridEl.innerHTML = cells.join('');

      gridEl.querySelectorAll('.day[data-date]').forEach((el) => {
        el.addEventListener('click', () => {
          state.selectedDate = el.dataset.date;
          gridEl.querySelectorAll('.day').forEach((d) => d.classList.remove('selected'));
          el.classList.add('selected');
          showDayDetails();
        });
      });
    };

    const renderDayTasks = (day) => {
      const list = document.getElementById('tasks-list');
      if (!day.tasks.length) {
        list.innerHTML = '<p class="empty-note">Nothing planned for this day yet.</p>';
        return;
      }
      list.innerHTML = day.tasks
        .map(
          (task, index) => `
            <div class="task-row ${task.completed ? 'completed' : ''}">
              <span class="task-text">${escapeHtml(task.text)}</span>
              <div class="task-actions">
                <button class="toggle-btn" data-index="${index}">${task.completed ? 'Undo' : 'Done'}</button>
                <button class="delete-btn" data-index="${index}">Delete</button>
              </div>
            </div>`
        )
        .join('');

      list.querySelectorAll('.toggle-btn').forEach((btn) => {
        btn.addEventListener('click', () =>
          mutateDay(`/api/days/${state.selectedDate}/tasks/${btn.dataset.index}/toggle`, 'POST'));
      });
      list.querySelectorAll('.delete-btn').forEach((btn) => {
        btn.addEventListener('click', () =>
          mutateDay(`/api/days/${state.selectedDate}/tasks/${btn.dataset.index}`, 'DELETE'));
      });
    };

    const showDayDetails = async () => {
      if (!state.selectedDate) return;
      const day = await api(`/api/days/${state.selectedDate}`);
      const local = new Date(`${day.date}T00:00:00`);
      document.getElementById('selected-date').textContent = local.toLocaleDateString('en-US', {
        weekday: 'long',
        year: 'numeric',
        month: 'long',
        day: 'numeric'
      });
      renderDayTasks(day);
      document.getElementById('day-details').style.display = 'block';
    };

    const mutateDay = async (path, method, body) => {
      try {
        const day = await api(path, {
          method,
          headers: body ? { 'content-type': 'application/json' } : undefined,
          body: body ? JSON.stringify(body) : undefined
        });
        renderDayTasks(day);
        await Promise.all([loadCalendar(), loadDashboard()]);
        setStatus('');
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    const addTask = () => {
      const input = document.getElementById('new-task');
      const text = input.value.trim();
      if (!text || !state.selectedDate) return;
      input.value = '';
      mutateDay(`/api/days/${state.selectedDate}/tasks`, 'POST', { text });
    };

    document.getElementById('add-task').addEventListener('click', addTask);
    document.getElementById('new-task').addEventListener('keypress', (event) => {
      if (event.key === 'Enter') addTask();
    });

    document.getElementById('prev-month').addEventListener('click', () => {
      state.viewMonth -= 1;
      if (state.viewMonth === 0) {
        state.viewMonth = 12;
        state.viewYear -= 1;
      }
      loadCalendar().catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('next-month').addEventListener('click', () => {
      state.viewMonth += 1;
      if (state.viewMonth === 13) {
        state.viewMonth = 1;
        state.viewYear += 1;
      }
      loadCalendar().catch((err) => setStatus(err.message, 'error'));
    });

    // --- Reminders ---
    const banner = document.getElementById('reminder-banner');

    const loadReminders = async () => {
      const data = await api('/api/reminders');
      if (data.permission === 'default') {
        setTimeout(() => banner.classList.add('visible'), 2000);
      }
    };

    document.getElementById('enable-reminders').addEventListener('click', async () => {
      await api('/api/reminders/enable', { method: 'POST' }).catch(() => {});
      banner.classList.remove('visible');
    });

    document.getElementById('skip-reminders').addEventListener('click', async () => {
      await api('/api/reminders/dismiss', { method: 'POST' }).catch(() => {});
      banner.classList.remove('visible');
    });

    // --- Boot ---
    Promise.all([loadDashboard(), loadSyllabus(), loadCalendar(), loadReminders()]).catch(
      (err) => setStatus(err.message, 'error')
    );
  </script>
</body>
</html>
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_fills_every_placeholder() {
        let stats = StatsAggregate {
            streak: 3,
            completed_tasks: 12,
            study_hours: 4.5,
            achievements: 2,
        };
        let page = render_index("Friday, March 15, 2024", &stats, "Keep going.");

        assert!(page.contains("Friday, March 15, 2024"));
        assert!(page.contains(">12<"));
        assert!(page.contains(">4.5<"));
        assert!(page.contains("Keep going."));
        assert!(!page.contains("{{"));
    }
}
